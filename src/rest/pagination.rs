use crate::{PageDefaults, Pageable};
use axum::extract::{FromRequestParts, Query};
use http::request::Parts;
use serde::Deserialize;
use std::convert::Infallible;

/// Raw `page` / `size` query parameters, kept as strings so that
/// non-numeric input cannot fail deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawPageQuery {
    page: Option<String>,
    size: Option<String>,
}

impl RawPageQuery {
    fn from_parts(parts: &Parts) -> Self {
        Query::<RawPageQuery>::try_from_uri(&parts.uri)
            .map(|Query(raw)| raw)
            .unwrap_or_default()
    }
}

/// Extracts a clamped [`Pageable`] from the `page` / `size` query
/// parameters, with the built-in defaults (`page=0`, `size=50`).
///
/// Extraction is infallible: malformed query input degrades to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination(pub Pageable);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = RawPageQuery::from_parts(parts);
        Ok(Self(Pageable::resolve(
            raw.page.as_deref(),
            raw.size.as_deref(),
            PageDefaults::default(),
        )))
    }
}

/// Same as [`Pagination`], with caller-chosen defaults for absent or
/// unparsable parameters, e.g. `PaginationWith<0, 20>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationWith<const PAGE: i64, const SIZE: i64>(pub Pageable);

impl<S, const PAGE: i64, const SIZE: i64> FromRequestParts<S> for PaginationWith<PAGE, SIZE>
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = RawPageQuery::from_parts(parts);
        Ok(Self(Pageable::resolve(
            raw.page.as_deref(),
            raw.size.as_deref(),
            PageDefaults {
                page: Some(PAGE),
                size: Some(SIZE),
            },
        )))
    }
}
