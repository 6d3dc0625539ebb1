//! Reply Parsers
//!
//! Loose free-text parsing of generative replies, isolated here so a stricter
//! structured-output contract can later replace either parser without
//! touching callers.
//!
//! - `extract_brace_object`: greedy first-`{`-to-last-`}` match, tolerant of
//!   prose and markdown fences around the object
//! - `parse_bullet_lines`: keeps `*`-prefixed lines in order

use serde::de::DeserializeOwned;

use crate::types::{ForgeError, Result};

/// Extract the first brace-delimited object from a reply and deserialize it.
///
/// Fails with `UpstreamFormat` when no `{...}` block exists or it does not
/// parse as the expected structure. `operation` names the caller for error
/// messages and logs.
pub fn extract_brace_object<T: DeserializeOwned>(reply: &str, operation: &str) -> Result<T> {
    let start = reply
        .find('{')
        .ok_or_else(|| ForgeError::upstream_format(operation, "no brace-delimited object"))?;
    let end = reply
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| ForgeError::upstream_format(operation, "no brace-delimited object"))?;

    serde_json::from_str(&reply[start..=end])
        .map_err(|e| ForgeError::upstream_format(operation, e.to_string()))
}

/// Parse a bullet-list reply into ordered labels.
///
/// Keeps lines whose trimmed form starts with `*`, strips the marker and
/// surrounding whitespace, and drops lines that reduce to nothing. Zero
/// matches is a valid empty result, not an error.
pub fn parse_bullet_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('*'))
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StackAdvice;

    #[test]
    fn test_extracts_object_wrapped_in_prose() {
        let reply = r#"Sure! Here is the breakdown:
```json
{"detectedStack": "None", "suggestions": ["MERN Stack", "Django + React"]}
```
Let me know if you need more."#;

        let advice: StackAdvice = extract_brace_object(reply, "stack detection").unwrap();
        assert_eq!(advice.detected_stack, "None");
        assert_eq!(advice.suggestions, vec!["MERN Stack", "Django + React"]);
    }

    #[test]
    fn test_missing_braces_is_format_error() {
        let err = extract_brace_object::<StackAdvice>("no object here", "stack detection")
            .unwrap_err();
        assert!(matches!(err, ForgeError::UpstreamFormat { .. }));
    }

    #[test]
    fn test_unparsable_object_is_format_error() {
        let err = extract_brace_object::<StackAdvice>("{not json}", "stack detection").unwrap_err();
        assert!(matches!(err, ForgeError::UpstreamFormat { .. }));
    }

    #[test]
    fn test_lone_open_brace_is_format_error() {
        let err = extract_brace_object::<StackAdvice>("} {", "stack detection").unwrap_err();
        assert!(matches!(err, ForgeError::UpstreamFormat { .. }));
    }

    #[test]
    fn test_bullets_preserve_order_and_skip_prose() {
        let reply = "Here are the features:\n* A\nsome commentary\n  *   B\n* C\n";
        assert_eq!(parse_bullet_lines(reply), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_no_bullets_is_empty_not_error() {
        assert!(parse_bullet_lines("1. numbered\n2. list").is_empty());
    }

    #[test]
    fn test_bare_marker_lines_are_dropped() {
        assert_eq!(parse_bullet_lines("*\n* Real Feature\n*   "), vec!["Real Feature"]);
    }
}
