use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Page number used when neither the request nor the defaults provide one.
pub const DEFAULT_PAGE: i64 = 0;
/// Page size used when neither the request nor the defaults provide one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;
/// Hard upper bound for page sizes; larger requests are clamped down.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Fallback values applied when a query parameter is absent or unparsable.
///
/// Defaults are applied before clamping, so an out-of-range default is
/// corrected the same way an out-of-range query parameter would be.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageDefaults {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// A validated pagination request.
///
/// Built from raw query input through [`Pageable::resolve`]; once
/// constructed, `page` is always `>= 0` and `size` is always within
/// `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Pageable {
    pub page: i64,
    pub size: i64,
}

impl Pageable {
    /// Resolves raw `page` / `size` query parameters into a clamped request.
    ///
    /// Each parameter is parsed as an integer; absent or unparsable input
    /// falls back to the matching value in `defaults`, then to
    /// [`DEFAULT_PAGE`] / [`DEFAULT_PAGE_SIZE`]. Malformed input never
    /// fails the request, it degrades through the fallback chain.
    #[must_use]
    pub fn resolve(raw_page: Option<&str>, raw_size: Option<&str>, defaults: PageDefaults) -> Self {
        let page = parse_or(raw_page, defaults.page, DEFAULT_PAGE);
        let size = parse_or(raw_size, defaults.size, DEFAULT_PAGE_SIZE);
        Self { page, size }.clamped()
    }

    fn clamped(self) -> Self {
        Self {
            page: self.page.max(0),
            size: self.size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of rows to skip: `page * size`, saturating at `i64::MAX` so
    /// an extreme page number cannot overflow.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    /// Number of rows to fetch.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_or(raw: Option<&str>, default: Option<i64>, fallback: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .or(default)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_range_values_are_kept_exactly() {
        let pageable = Pageable::resolve(Some("3"), Some("25"), PageDefaults::default());
        assert_eq!(pageable, Pageable { page: 3, size: 25 });
    }

    #[test]
    fn test_resolve_without_input_uses_built_in_defaults() {
        let pageable = Pageable::resolve(None, None, PageDefaults::default());
        assert_eq!(pageable, Pageable { page: 0, size: 50 });
    }

    #[test]
    fn test_resolve_clamps_out_of_range_input() {
        let pageable = Pageable::resolve(Some("-1"), Some("1000"), PageDefaults::default());
        assert_eq!(pageable, Pageable { page: 0, size: 50 });

        let pageable = Pageable::resolve(Some("2"), Some("0"), PageDefaults::default());
        assert_eq!(pageable, Pageable { page: 2, size: 1 });

        let pageable = Pageable::resolve(Some("2"), Some("-7"), PageDefaults::default());
        assert_eq!(pageable, Pageable { page: 2, size: 1 });
    }

    #[test]
    fn test_resolve_unparsable_input_falls_back_to_defaults() {
        let defaults = PageDefaults {
            page: Some(2),
            size: Some(20),
        };
        let pageable = Pageable::resolve(Some("abc"), Some("10"), defaults);
        assert_eq!(pageable, Pageable { page: 2, size: 10 });

        let pageable = Pageable::resolve(Some("abc"), Some("x"), defaults);
        assert_eq!(pageable, Pageable { page: 2, size: 20 });
    }

    #[test]
    fn test_resolve_unparsable_input_without_defaults() {
        let pageable = Pageable::resolve(Some("abc"), Some("x"), PageDefaults::default());
        assert_eq!(pageable, Pageable { page: 0, size: 50 });
    }

    #[test]
    fn test_resolve_zero_page_is_kept_over_default() {
        let defaults = PageDefaults {
            page: Some(2),
            size: None,
        };
        let pageable = Pageable::resolve(Some("0"), None, defaults);
        assert_eq!(pageable.page, 0);
    }

    #[test]
    fn test_resolve_clamps_out_of_range_defaults() {
        let defaults = PageDefaults {
            page: Some(-5),
            size: Some(500),
        };
        let pageable = Pageable::resolve(None, None, defaults);
        assert_eq!(pageable, Pageable { page: 0, size: 50 });
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let defaults = PageDefaults {
            page: Some(1),
            size: Some(10),
        };
        let first = Pageable::resolve(Some("4"), Some("nope"), defaults);
        let second = Pageable::resolve(Some("4"), Some("nope"), defaults);
        assert_eq!(first, second);
    }

    #[test]
    fn test_offset_and_limit() {
        let pageable = Pageable { page: 3, size: 25 };
        assert_eq!(pageable.offset(), 75);
        assert_eq!(pageable.limit(), 25);
    }

    #[test]
    fn test_offset_saturates_for_extreme_page_numbers() {
        let pageable = Pageable::resolve(
            Some("9223372036854775807"),
            Some("50"),
            PageDefaults::default(),
        );
        assert_eq!(pageable, Pageable { page: i64::MAX, size: 50 });
        assert_eq!(pageable.offset(), i64::MAX);

        let pageable = Pageable { page: i64::MAX / 2, size: 50 };
        assert!(pageable.offset() >= 0);
    }
}
