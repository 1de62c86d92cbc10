use crate::storage::PageStorage;
use crate::{Selectable, StorageError};
use serde::{Deserialize, Serialize};

// Simple entity shared by the unit tests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Selectable for Customer {
    const FIELDS: &'static [&'static str] = &["id", "name", "email"];
}

pub fn customers(count: usize) -> Vec<Customer> {
    (0..count)
        .map(|i| Customer {
            id: format!("c-{i}"),
            name: format!("Customer {i}"),
            email: format!("customer{i}@example.com"),
        })
        .collect()
}

/// A storage whose queries always fail, for exercising the
/// degrade-don't-fail path of `find_page`.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage;

#[async_trait::async_trait]
impl PageStorage for FailingStorage {
    type Item = Customer;
    type Options = ();

    async fn find_and_count(
        &self,
        _options: Self::Options,
        _limit: i64,
        _offset: i64,
    ) -> Result<(Vec<Self::Item>, i64), StorageError> {
        Err(StorageError::database_error(std::io::Error::other(
            "connection refused",
        )))
    }
}
