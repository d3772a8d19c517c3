//! Admin list search and pagination helpers.
//!
//! A search query is split on whitespace; every word must appear
//! (case-insensitively) in at least one of the searched columns. The
//! repositories bind the output of [`search_patterns`] as a `TEXT[]` and use
//! `column ILIKE ALL($n)`, which is vacuously true for an empty array.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per list page.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum number of rows per list page.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Escape `ILIKE` wildcards so user input matches literally.
///
/// PostgreSQL's default `LIKE` escape character is the backslash.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Turn a free-text query into one `%word%` pattern per whitespace-separated word.
///
/// `None`, empty and whitespace-only input yield no patterns.
///
/// # Examples
///
/// ```
/// use storyverse_core::search::search_patterns;
/// assert_eq!(search_patterns(Some("frodo  baggins")), vec!["%frodo%", "%baggins%"]);
/// assert!(search_patterns(Some("   ")).is_empty());
/// assert!(search_patterns(None).is_empty());
/// ```
pub fn search_patterns(query: Option<&str>) -> Vec<String> {
    query
        .map(|q| {
            q.split_whitespace()
                .map(|word| format!("%{}%", escape_like(word)))
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_applies_default_and_bounds() {
        assert_eq!(clamp_limit(None, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 100);
        assert_eq!(clamp_limit(Some(0), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-5), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
        assert_eq!(clamp_limit(Some(10_000), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 500);
        assert_eq!(clamp_limit(Some(42), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 42);
    }

    #[test]
    fn clamp_offset_is_never_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(Some(7)), 7);
    }

    #[test]
    fn escape_like_escapes_wildcards_and_backslash() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn search_patterns_splits_on_whitespace() {
        assert_eq!(
            search_patterns(Some(" ring\tof  power ")),
            vec!["%ring%", "%of%", "%power%"]
        );
    }

    #[test]
    fn search_patterns_escapes_each_word() {
        assert_eq!(search_patterns(Some("50% off_")), vec!["%50\\%%", "%off\\_%"]);
    }

    #[test]
    fn search_patterns_empty_input_matches_everything() {
        assert!(search_patterns(Some("")).is_empty());
        assert!(search_patterns(None).is_empty());
    }
}
