//! Recovery of JSON arrays from free-form model output.
//!
//! Models asked for "ONLY valid JSON" still wrap the payload in prose or
//! code fences often enough that strict parsing of the whole response is a
//! losing strategy. The span between the first `[` and the last `]` is
//! parsed instead; anything outside it is discarded.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from structured-output recovery
#[derive(Error, Debug)]
pub enum ParseError {
    /// Response contained no bracketed span at all
    #[error("No JSON array found in response")]
    NoJsonArray,

    /// Bracketed span was not valid JSON of the expected shape
    #[error("Malformed JSON array: {0}")]
    Json(#[from] serde_json::Error),
}

/// Extract and deserialize the outermost JSON array in `text`.
pub fn try_parse_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ParseError> {
    let start = text.find('[').ok_or(ParseError::NoJsonArray)?;
    let end = text.rfind(']').ok_or(ParseError::NoJsonArray)?;
    if end < start {
        return Err(ParseError::NoJsonArray);
    }
    Ok(serde_json::from_str(&text[start..=end])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_bare_array() {
        let parsed: Vec<String> = try_parse_array(r#"["a", "b"]"#).unwrap();
        assert_eq!(parsed, vec!["a", "b"]);
    }

    #[test]
    fn test_strips_surrounding_prose() {
        let text = "Here you go:\n```json\n[\"one\", \"two\"]\n```\nHope that helps!";
        let parsed: Vec<String> = try_parse_array(text).unwrap();
        assert_eq!(parsed, vec!["one", "two"]);
    }

    #[test]
    fn test_nested_arrays_survive() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Q {
            question: String,
            options: Vec<String>,
        }
        let text = r#"Sure: [{"question": "x?", "options": ["a", "b"]}] done"#;
        let parsed: Vec<Q> = try_parse_array(text).unwrap();
        assert_eq!(parsed[0].options.len(), 2);
    }

    #[test]
    fn test_no_array_is_an_error() {
        let err = try_parse_array::<String>("no brackets here").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonArray));
    }

    #[test]
    fn test_reversed_brackets_are_an_error() {
        let err = try_parse_array::<String>("] oops [").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonArray));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = try_parse_array::<String>("[not, valid, json]").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
