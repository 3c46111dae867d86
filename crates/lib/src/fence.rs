//! # Completion Post-Processing
//!
//! Models are asked to answer with bare JSON but frequently wrap it in a
//! markdown code block anyway. These helpers unwrap the block and parse what
//! is left.

use crate::errors::ListingError;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// A fence at the very start of the reply, an optional language tag, and the
/// body up to the closing fence or the end of the text.
const LEADING_FENCE_PATTERN: &str = r"^```[A-Za-z0-9]*\s*([\s\S]*?)\s*(?:```|$)";

/// Strips a markdown code fence from a completion, if it opens with one.
///
/// A leading language tag such as `json` is dropped and the result is
/// trimmed. Text that does not start with a fence is only trimmed, so
/// backticks inside a bare JSON value are left alone. An unterminated fence
/// keeps everything after the opening delimiter.
pub fn strip_code_fence(raw: &str) -> Result<&str, ListingError> {
    let trimmed = raw.trim();
    let re = Regex::new(LEADING_FENCE_PATTERN)?;
    let body = re
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |m| m.as_str());
    Ok(body.trim())
}

/// Strips any code fence and parses the remainder as JSON.
pub fn parse_completion_json(raw: &str) -> Result<Value, ListingError> {
    let cleaned = strip_code_fence(raw)?;
    debug!("Parsing AI completion as JSON: {}", cleaned);
    serde_json::from_str(cleaned)
        .map_err(|e| ListingError::AiResponseFormat(format!("AI returned invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(raw: &str) -> &str {
        strip_code_fence(raw).unwrap()
    }

    #[test]
    fn test_strip_json_tagged_fence() {
        let raw = "```json\n{\"product_name\":\"Red Saree\"}\n```";
        assert_eq!(strip(raw), "{\"product_name\":\"Red Saree\"}");
    }

    #[test]
    fn test_strip_untagged_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_tag_glued_to_body() {
        assert_eq!(strip("```json{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip("```JSON\n[1]\n```"), "[1]");
    }

    #[test]
    fn test_no_fence_is_only_trimmed() {
        assert_eq!(strip("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_backticks_inside_bare_json_are_kept() {
        let raw = r#"{"product_name":"Mug","description":"Print ```Chai``` on it"}"#;
        assert_eq!(strip(raw), raw);

        let parsed = parse_completion_json(raw).unwrap();
        assert_eq!(parsed["description"], "Print ```Chai``` on it");
    }

    #[test]
    fn test_unterminated_fence_and_leading_whitespace() {
        assert_eq!(strip("```json\n{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip("\n\n  ```json\n{\"a\": 1}\n```\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_prose_before_fence_is_not_unwrapped() {
        let raw = "Here you go:\n```json\n{\"a\": 1}\n```";
        assert_eq!(strip(raw), raw);
        assert!(matches!(
            parse_completion_json(raw),
            Err(ListingError::AiResponseFormat(_))
        ));
    }

    #[test]
    fn test_parse_reports_parser_detail() {
        let err = parse_completion_json("```json\nnot json\n```").unwrap_err();
        match err {
            ListingError::AiResponseFormat(msg) => {
                assert!(msg.starts_with("AI returned invalid JSON: "), "{msg}");
                assert!(msg.contains("line 1"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
