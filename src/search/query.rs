//! Query Normalization
//!
//! Search backends penalize long, punctuation-heavy queries; this keeps them
//! short and keyword-dense.

use crate::constants::search::{MAX_QUERY_TOKENS, STRIPPED_CHARS};

/// Turn a free-text label plus an optional stack hint into a bounded query.
///
/// Strips `:()`, collapses whitespace, keeps at most the first five label
/// tokens, and appends the stack hint. Always returns a string; a label that
/// reduces to nothing leaves just the hint.
pub fn normalize(label: &str, stack_hint: &str) -> String {
    let cleaned = label.replace(STRIPPED_CHARS, "");
    let mut query = cleaned
        .split_whitespace()
        .take(MAX_QUERY_TOKENS)
        .collect::<Vec<_>>()
        .join(" ");

    let hint = stack_hint.trim();
    if !hint.is_empty() {
        if !query.is_empty() {
            query.push(' ');
        }
        query.push_str(hint);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(
            normalize("User  Authentication: (OAuth)", ""),
            "User Authentication OAuth"
        );
    }

    #[test]
    fn test_keeps_at_most_five_label_tokens() {
        assert_eq!(
            normalize("one two three four five six seven", ""),
            "one two three four five"
        );
    }

    #[test]
    fn test_appends_stack_hint() {
        assert_eq!(
            normalize("Post Editor", "MERN Stack"),
            "Post Editor MERN Stack"
        );
    }

    #[test]
    fn test_empty_label_leaves_just_the_hint() {
        assert_eq!(normalize(":()", "MERN Stack"), "MERN Stack");
        assert_eq!(normalize("", ""), "");
    }

    proptest! {
        #[test]
        fn prop_no_stripped_chars_or_double_spaces(label in ".{0,80}") {
            let query = normalize(&label, "");
            prop_assert!(!query.contains([':', '(', ')']));
            prop_assert!(!query.contains("  "));
            prop_assert_eq!(query.trim(), &query);
        }

        #[test]
        fn prop_at_most_five_label_tokens(label in "[a-zA-Z :()]{0,120}") {
            let query = normalize(&label, "");
            prop_assert!(query.split_whitespace().count() <= 5);
        }
    }
}
