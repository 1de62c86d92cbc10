use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// A slice of query results together with count-derived metadata.
///
/// Plain data, built once per query execution and meant to be serialized
/// as-is (camelCase on the wire: `totalElements`, `totalPages`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Page<T> {
    pub elements: Vec<T>,
    pub total_elements: i64,
    /// Computed as `ceil(total_elements / max(elements.len(), 1))`. The
    /// divisor is the length of the returned slice, so a final page that
    /// is shorter than a full page overstates the page count.
    pub total_pages: i64,
    /// The page that was requested, not clamped here; clamping is the
    /// resolver's job.
    pub page: i64,
    /// Length of `elements`.
    pub size: i64,
}

impl<T> Page<T> {
    /// Builds a page envelope from a result slice and the total count of
    /// matching rows. The denominator of `total_pages` is floored at 1,
    /// so an empty slice never divides by zero.
    #[must_use]
    pub fn of(elements: Vec<T>, total_elements: i64, page: i64) -> Self {
        let size = elements.len() as i64;
        let divisor = size.max(1);
        Self {
            total_pages: (total_elements + divisor - 1) / divisor,
            total_elements,
            page,
            size,
            elements,
        }
    }

    /// Single-page envelope over an in-memory collection: the total is the
    /// collection length and the requested page is 0.
    #[must_use]
    pub fn from_elements(elements: Vec<T>) -> Self {
        let total = elements.len() as i64;
        Self::of(elements, total, 0)
    }

    /// The empty page returned when a query matched nothing or failed.
    #[must_use]
    pub fn empty(page: i64) -> Self {
        Self::of(Vec::new(), 0, page)
    }

    /// Maps the elements while keeping the pagination metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            elements: self.elements.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}
