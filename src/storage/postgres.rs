use crate::storage::PageStorage;
use crate::StorageError;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio_postgres::{types::ToSql, Client};

fn map_pg_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> StorageError {
    StorageError::database_error(e)
}

/// Query options for [`PostgresStorage`]: an optional WHERE fragment with
/// its positional parameters, and an optional ORDER BY fragment. Neither
/// fragment includes its keyword.
#[derive(Default)]
pub struct PostgresOptions {
    pub where_sql: Option<String>,
    pub params: Vec<Box<dyn ToSql + Sync + Send>>,
    pub order_by: Option<String>,
}

impl PostgresOptions {
    #[must_use]
    pub fn filtered(where_sql: &str, params: Vec<Box<dyn ToSql + Sync + Send>>) -> Self {
        Self {
            where_sql: Some(where_sql.to_string()),
            params,
            order_by: None,
        }
    }

    #[must_use]
    pub fn ordered_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }
}

/// Paged storage over a PostgreSQL table of shape `(id, data JSONB)`.
///
/// Rows are decoded from the `data` column through serde_json.
#[derive(Debug, Clone)]
pub struct PostgresStorage<V> {
    _phantom: PhantomData<V>,
    client: Arc<Client>,
    table_name: String,
}

impl<V> PostgresStorage<V>
where
    V: Debug + Clone + DeserializeOwned + Send + Sync,
{
    #[must_use]
    pub fn new(client: Arc<Client>, table_name: &str) -> Self {
        Self {
            _phantom: PhantomData,
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl<V> PageStorage for PostgresStorage<V>
where
    V: Debug + Clone + DeserializeOwned + Send + Sync,
{
    type Item = V;
    type Options = PostgresOptions;

    async fn find_and_count(
        &self,
        options: Self::Options,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Self::Item>, i64), StorageError> {
        let PostgresOptions {
            where_sql,
            params,
            order_by,
        } = options;
        let where_full = match where_sql {
            Some(sql) if !sql.trim().is_empty() => format!(" WHERE {}", sql),
            _ => String::new(),
        };
        let order_full = order_by
            .map(|s| format!(" ORDER BY {}", s))
            .unwrap_or_default();

        // total count, ignoring limit/offset
        let count_sql = format!(
            "SELECT COUNT(*)::BIGINT AS total FROM {}{}",
            self.table_name, where_full
        );
        let count_params: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|b| b.as_ref() as &(dyn ToSql + Sync))
            .collect();
        let row = self
            .client
            .query_one(&count_sql, &count_params)
            .await
            .map_err(map_pg_error)?;
        let total: i64 = row.try_get::<_, i64>("total").map_err(map_pg_error)?;

        // page query
        let param_offset = params.len() + 1;
        let select_sql = format!(
            "SELECT data FROM {}{}{} OFFSET ${} LIMIT ${}",
            self.table_name,
            where_full,
            order_full,
            param_offset,
            param_offset + 1
        );
        let mut select_params: Vec<Box<dyn ToSql + Sync + Send>> = params;
        select_params.push(Box::new(offset));
        select_params.push(Box::new(limit));
        let select_params_ref: Vec<&(dyn ToSql + Sync)> = select_params
            .iter()
            .map(|b| b.as_ref() as &(dyn ToSql + Sync))
            .collect();
        let rows = self
            .client
            .query(&select_sql, &select_params_ref)
            .await
            .map_err(map_pg_error)?;

        let mut items: Vec<V> = Vec::with_capacity(rows.len());
        for row in rows {
            let val: JsonValue = row.try_get::<_, JsonValue>("data").map_err(map_pg_error)?;
            let v: V = serde_json::from_value(val).map_err(StorageError::serialization_error)?;
            items.push(v);
        }
        Ok((items, total))
    }
}
