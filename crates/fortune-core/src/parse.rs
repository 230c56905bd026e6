//! The JSON guard and helpers for AI-proxy reply text.
//!
//! Backend payloads and AI replies are untrusted text. Everything here
//! turns that text into a tagged result instead of a panic or an
//! exception-shaped control flow: callers inspect the `Result`, and a
//! malformed payload is an ordinary, expected value.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Outcome of running untrusted text through the guard: exactly one of
/// the parsed value or a failure, never a panic.
pub type ParsedResult<T> = Result<T, ParseFailure>;

/// A descriptive, displayable parse failure. The message keeps
/// serde_json's line/column detail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseFailure {
    pub message: String,
}

/// Parse raw text as JSON into `T`.
///
/// On success returns the typed value; on any failure returns a
/// [`ParseFailure`] carrying the parser's message. Never panics.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> ParsedResult<T> {
    serde_json::from_str(text).map_err(|err| ParseFailure {
        message: err.to_string(),
    })
}

/// Strip the markdown code-fence markers the AI proxy sometimes wraps
/// around a JSON reply.
///
/// Removes a leading ```` ```json ```` line marker and a trailing
/// ```` ``` ```` marker after trimming surrounding whitespace. Only those
/// two exact markers are touched; a bare ```` ``` ```` opener is left
/// alone. The proxy is told not to wrap replies in markdown, but it
/// sometimes does anyway.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed.strip_prefix("```json\n").unwrap_or(trimmed);
    let without_close = without_open.strip_suffix("```").unwrap_or(without_open);
    without_close.trim()
}

/// Pretty-print `text` when it is (possibly fenced) JSON; otherwise
/// return it unchanged.
///
/// Strategy replies may be code, pseudo-code, or a JSON parameter object;
/// this renders the JSON case readably without guessing at the rest.
pub fn format_code(text: &str) -> String {
    let candidate = strip_code_fences(text);
    match parse_json::<serde_json::Value>(candidate) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_node::FileNode;

    #[test]
    fn guard_returns_data_for_valid_json() {
        let parsed: ParsedResult<Vec<u32>> = parse_json("[1, 2, 3]");
        assert_eq!(parsed, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn guard_returns_failure_for_malformed_json() {
        let parsed: ParsedResult<serde_json::Value> = parse_json("{not json");
        let failure = parsed.unwrap_err();
        assert!(!failure.message.is_empty());
    }

    #[test]
    fn guard_returns_failure_on_shape_mismatch() {
        // Valid JSON, wrong shape for the target type: still a guarded
        // failure, not a panic.
        let parsed: ParsedResult<Vec<u32>> = parse_json(r#"{"a": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn strips_json_fences() {
        let fenced = "```json\n{\"name\":\"root\",\"type\":\"folder\",\"children\":[]}\n```";
        assert_eq!(
            strip_code_fences(fenced),
            "{\"name\":\"root\",\"type\":\"folder\",\"children\":[]}"
        );
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  plain text  "), "plain text");
        // A bare opener is not recognized as a fence.
        assert_eq!(strip_code_fences("```\nplain\n"), "```\nplain");
    }

    #[test]
    fn fenced_tree_reply_parses_as_file_node() {
        let reply = "```json\n{\"name\":\"root\",\"type\":\"folder\",\"children\":[]}\n```";
        let node: FileNode = parse_json(strip_code_fences(reply)).unwrap();
        assert_eq!(node.name, "root");
        assert!(node.is_folder());
        assert!(node.children().is_empty());
    }

    #[test]
    fn format_code_pretty_prints_json() {
        let formatted = format_code(r#"{"fast":12,"slow":26}"#);
        assert_eq!(formatted, "{\n  \"fast\": 12,\n  \"slow\": 26\n}");
    }

    #[test]
    fn format_code_passes_through_non_json() {
        let code = "def signal(row):\n    return row.rsi < 30";
        assert_eq!(format_code(code), code);
    }
}
