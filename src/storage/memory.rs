use crate::storage::PageStorage;
use crate::StorageError;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Query options for the in-memory storage: an optional match predicate
/// applied before counting and slicing.
pub struct MemoryOptions<T> {
    pub filter: Option<Arc<dyn Fn(&T) -> bool + Send + Sync>>,
}

impl<T> MemoryOptions<T> {
    #[must_use]
    pub fn matching(filter: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            filter: Some(Arc::new(filter)),
        }
    }
}

impl<T> Default for MemoryOptions<T> {
    fn default() -> Self {
        Self { filter: None }
    }
}

impl<T> Clone for MemoryOptions<T> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
        }
    }
}

/// A simple in-memory storage that can be used for testing or simple
/// applications. Insertion order is preserved and defines the paging
/// order.
pub struct InMemoryStorage<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T> InMemoryStorage<T>
where
    T: Clone + Send + Sync,
{
    /// Creates a new empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends one item.
    pub fn insert(&self, item: T) {
        let mut items = self.items.lock().unwrap();
        items.push(item);
    }

    /// Appends a batch of items.
    pub fn extend(&self, batch: impl IntoIterator<Item = T>) {
        let mut items = self.items.lock().unwrap();
        items.extend(batch);
    }

    pub fn len(&self) -> usize {
        let items = self.items.lock().unwrap();
        items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all items from the storage.
    pub fn clear(&self) {
        let mut items = self.items.lock().unwrap();
        items.clear();
    }
}

impl<T> Default for InMemoryStorage<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryStorage<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

#[async_trait::async_trait]
impl<T> PageStorage for InMemoryStorage<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type Options = MemoryOptions<T>;

    async fn find_and_count(
        &self,
        options: Self::Options,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Self::Item>, i64), StorageError> {
        let items = self.items.lock().unwrap();
        let matched: Vec<&T> = match &options.filter {
            Some(filter) => items.iter().filter(|item| filter(item)).collect(),
            None => items.iter().collect(),
        };
        let total = matched.len() as i64;

        let offset = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        let rows: Vec<T> = matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        debug!(total, rows = rows.len(), "in-memory page fetched");

        Ok((rows, total))
    }
}
