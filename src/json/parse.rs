//! Purpose: Provide the runtime JSON decode entrypoints and failure categories.
//! Exports: `from_str`, `from_slice`, `ParseFailureCategory`, categorization + hint helpers.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Decode errors are returned untouched; categorization only reads them.
//! Invariants: Hints never echo payload bytes, only category and position.
//! Notes: Self-contained so integration tests can include it by path.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(input)
}

/// Failure classes reachable when decoding text into `serde_json::Value`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Truncated,
    Utf8,
    NumericRange,
    DepthLimit,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
            ParseFailureCategory::Utf8 => "utf8",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
        }
    }

    fn suggestion(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "Check for missing quotes, commas, or brackets.",
            ParseFailureCategory::Truncated => {
                "Input ended early; make sure the whole document was provided."
            }
            ParseFailureCategory::Utf8 => "Input must be valid UTF-8.",
            ParseFailureCategory::NumericRange => "A number is too large to represent.",
            ParseFailureCategory::DepthLimit => "Reduce nesting depth of arrays and objects.",
        }
    }
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    if let Some(category) = categorize_known_message(&err.to_string()) {
        return category;
    }
    match err.classify() {
        Category::Eof => ParseFailureCategory::Truncated,
        // Data and Io only arise from typed targets or readers; neither is used here.
        Category::Syntax | Category::Data | Category::Io => ParseFailureCategory::Syntax,
    }
}

pub fn categorize_message(message: &str) -> ParseFailureCategory {
    categorize_known_message(message).unwrap_or(ParseFailureCategory::Syntax)
}

fn categorize_known_message(message: &str) -> Option<ParseFailureCategory> {
    let lower = message.to_ascii_lowercase();
    if lower.contains("recursion limit") {
        Some(ParseFailureCategory::DepthLimit)
    } else if lower.contains("number out of range") {
        Some(ParseFailureCategory::NumericRange)
    } else if lower.contains("utf-8") || lower.contains("unicode code point") {
        Some(ParseFailureCategory::Utf8)
    } else if lower.contains("eof while parsing") {
        Some(ParseFailureCategory::Truncated)
    } else {
        None
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    format!(
        "{context}: {} error at line {} column {}. {}",
        category.label(),
        err.line(),
        err.column(),
        category.suggestion()
    )
}

#[cfg(test)]
mod tests {
    use super::{
        ParseFailureCategory, categorize_error, categorize_message, from_str, hint_for_error,
    };
    use serde_json::Value;

    #[test]
    fn syntax_errors_are_categorized() {
        let err = from_str::<Value>("{not valid}").unwrap_err();
        assert_eq!(categorize_error(&err), ParseFailureCategory::Syntax);
    }

    #[test]
    fn truncated_input_is_categorized() {
        let err = from_str::<Value>(r#"{"a":"#).unwrap_err();
        assert_eq!(categorize_error(&err), ParseFailureCategory::Truncated);
    }

    #[test]
    fn unknown_messages_default_to_syntax() {
        assert_eq!(
            categorize_message("something odd"),
            ParseFailureCategory::Syntax
        );
        assert_eq!(
            categorize_message("invalid UTF-8 in string"),
            ParseFailureCategory::Utf8
        );
    }

    #[test]
    fn hint_mentions_position_not_payload() {
        let err = from_str::<Value>("[1, secret]").unwrap_err();
        let hint = hint_for_error(&err, "inline data");
        assert!(hint.starts_with("inline data: syntax error at line 1 column"));
        assert!(!hint.contains("secret"));
    }
}
