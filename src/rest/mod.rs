mod fields;
mod pagination;

use crate::StorageError;
use axum::response::{IntoResponse, Response};
use axum::Json;
pub use fields::*;
use http::StatusCode;
pub use pagination::*;
use serde_json::json;

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        match self {
            StorageError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "database connection error"})),
            )
                .into_response(),
            StorageError::SerializationError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "serialization error"})),
            )
                .into_response(),
            StorageError::UnexpectedError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "unexpected error"})),
            )
                .into_response(),
        }
    }
}
