use crate::{Page, Pageable, StorageError};
use tracing::warn;

/// A "count + fetch" capability over some backing store.
///
/// Implementors provide [`find_and_count`](PageStorage::find_and_count);
/// the paged operation [`find_page`](PageStorage::find_page) is derived
/// from it. Taking this as a trait rather than extending a concrete
/// repository type keeps the pagination logic decoupled from any ORM.
#[async_trait::async_trait]
pub trait PageStorage: Send + Sync {
    type Item: Send;
    /// Backend-specific query options (filters, ordering, relations).
    /// `Default` stands in for the empty options object when the caller
    /// supplies none.
    type Options: Default + Send;

    /// Returns the rows bounded by `limit` / `offset` together with the
    /// total count of matching rows ignoring `limit` / `offset`.
    async fn find_and_count(
        &self,
        options: Self::Options,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Self::Item>, i64), StorageError>;

    /// Executes a paged query and wraps the result into a [`Page`].
    ///
    /// `offset` is `pageable.page * pageable.size`, `limit` is
    /// `pageable.size`. A failing store does not fail the request: the
    /// error is logged and an empty page for the requested page number is
    /// returned instead, so callers always receive a page. A caller that
    /// must distinguish "no results" from "query failed" should use
    /// [`find_and_count`](PageStorage::find_and_count) directly.
    async fn find_page(&self, pageable: Pageable, options: Option<Self::Options>) -> Page<Self::Item> {
        let options = options.unwrap_or_default();
        match self
            .find_and_count(options, pageable.limit(), pageable.offset())
            .await
        {
            Ok((elements, total)) => Page::of(elements, total, pageable.page),
            Err(err) => {
                warn!(
                    error = %err,
                    page = pageable.page,
                    size = pageable.size,
                    "paged query failed, returning empty page"
                );
                Page::empty(pageable.page)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Customer, FailingStorage};

    #[tokio::test]
    async fn test_find_page_on_failing_store_resolves_to_empty_page() {
        let storage = FailingStorage;
        let page = storage.find_page(Pageable { page: 0, size: 50 }, None).await;

        assert_eq!(page, Page::<Customer>::empty(0));
        assert_eq!(page.total_elements, 0);
        assert!(page.elements.is_empty());
        assert_eq!(page.page, 0);
    }

    #[tokio::test]
    async fn test_find_page_on_failing_store_keeps_requested_page() {
        let storage = FailingStorage;
        let page = storage.find_page(Pageable { page: 7, size: 10 }, None).await;
        assert_eq!(page.page, 7);
    }
}
