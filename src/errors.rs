/// Failure of a storage collaborator while executing a paged query.
///
/// This error never reaches the caller of
/// [`PageStorage::find_page`](crate::storage::PageStorage::find_page):
/// the paged operation swallows it and substitutes an empty page. It only
/// travels the seam between a storage implementation and the paging
/// layer, or surfaces to users who call `find_and_count` directly.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{0}")]
    DatabaseError(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("{0}")]
    SerializationError(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("{0}")]
    UnexpectedError(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl StorageError {
    pub fn database_error(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::DatabaseError(Box::new(e))
    }

    pub fn serialization_error(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SerializationError(Box::new(e))
    }

    pub fn unexpected_error(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UnexpectedError(Box::new(e))
    }
}
