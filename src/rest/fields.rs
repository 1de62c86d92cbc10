use crate::{FieldSelection, Selectable};
use axum::extract::{FromRequestParts, Query};
use http::request::Parts;
use serde::Deserialize;
use std::convert::Infallible;
use std::marker::PhantomData;

#[derive(Debug, Clone, Default, Deserialize)]
struct RawFieldsQuery {
    fields: Option<String>,
}

/// Extracts an allow-listed [`FieldSelection`] for `E` from the `fields`
/// query parameter (a JSON array of strings, e.g.
/// `?fields=["id","name"]` url-encoded).
///
/// Extraction is infallible: an absent or malformed parameter yields the
/// full wildcard selection of `E`.
#[derive(Debug, Clone)]
pub struct Fields<E: Selectable> {
    pub selection: FieldSelection,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Selectable> Fields<E> {
    pub fn into_selection(self) -> FieldSelection {
        self.selection
    }
}

impl<S, E> FromRequestParts<S> for Fields<E>
where
    S: Send + Sync,
    E: Selectable,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<RawFieldsQuery>::try_from_uri(&parts.uri)
            .map(|Query(raw)| raw)
            .unwrap_or_default();
        Ok(Self {
            selection: FieldSelection::resolve::<E>(raw.fields.as_deref()),
            _marker: PhantomData,
        })
    }
}
