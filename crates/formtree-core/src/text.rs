//! Text helpers for deriving path segments from human-readable labels.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of anything that is not a lowercase ASCII letter or digit collapse
/// into a single separator.
static NON_SEGMENT_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Derives a path segment (slug) from a label.
///
/// The mapping is deliberately conservative so that every produced segment
/// matches the `\w+` class of the display-specification path pattern:
///
/// 1. The label is lowercased.
/// 2. Every run of characters outside `[a-z0-9]` becomes a single `_`.
///    Non-ASCII letters count as separators.
/// 3. Leading and trailing `_` are stripped.
///
/// The result may be empty (e.g. for an all-punctuation label); callers that
/// need a segment must treat an empty slug as an invalid label.
///
/// # Examples
///
/// ```
/// use formtree_core::text::slugify;
///
/// assert_eq!(slugify("First Name"), "first_name");
/// assert_eq!(slugify("  Green-Light Date  "), "green_light_date");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(label: &str) -> String {
    let lowered = label.to_lowercase();
    NON_SEGMENT_CHARS
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Age"), "age");
        assert_eq!(slugify("First Name"), "first_name");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Green -- Light   Date"), "green_light_date");
    }

    #[test]
    fn test_slugify_strips_edges() {
        assert_eq!(slugify("  (Director)  "), "director");
        assert_eq!(slugify("_private_"), "private");
    }

    #[test]
    fn test_slugify_leading_digit_kept() {
        assert_eq!(slugify("401k Plan"), "401k_plan");
    }

    #[test]
    fn test_slugify_non_ascii_is_separator() {
        assert_eq!(slugify("Café au lait"), "caf_au_lait");
    }

    #[test]
    fn test_slugify_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("  ---  "), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = slugify("Last Name");
        assert_eq!(slugify(&once), once);
    }
}
