//! Request-filter normalization shared by every resource reconciler.
//!
//! The list endpoints treat an absent, empty, or `all` status parameter as
//! "no filter", and an absent or empty text parameter as "no filter". The
//! normalizers below encode that policy in one place so mock and real paths
//! cannot drift.

/// Normalize a status filter: `None`, `""`, and `"all"` all mean "no filter".
///
/// Any other value is passed through verbatim — unknown statuses simply
/// match nothing rather than erroring.
pub fn status_filter(raw: Option<&str>) -> Option<&str> {
    match raw {
        Some("") | Some("all") | None => None,
        Some(value) => Some(value),
    }
}

/// Normalize a free-text filter: `None` and `""` mean "no filter".
pub fn text_filter(raw: Option<&str>) -> Option<&str> {
    match raw {
        Some("") | None => None,
        Some(value) => Some(value),
    }
}

/// Case-insensitive substring match used by the mock data path.
///
/// Mirrors the `ILIKE '%needle%'` pattern the real path binds.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
