//! Purpose: Report CLI failures on stderr.
//! Exports: `emit_error`, `usage_error_from_clap`.
//! Role: Turn an `Error` into labelled lines (TTY) or one JSON envelope (pipes).
//! Invariants: Both renderings come from the same `Detail` list, so they never disagree.
//! Invariants: The parser's own message is kept verbatim as a cause.
use std::error::Error as StdError;
use std::io::{self, IsTerminal};

use hostjson::api::{Error, ErrorKind};
use serde_json::{Map, Value, json};

use crate::ColorMode;

const COLOR_ERROR: &str = "31";
const COLOR_DETAIL: &str = "33";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Detail {
    Hint(String),
    Path(String),
    Position { line: usize, column: usize },
    Causes(Vec<String>),
}

fn details(err: &Error) -> Vec<Detail> {
    let mut out = Vec::new();
    if let Some(hint) = err.hint() {
        out.push(Detail::Hint(hint.to_string()));
    }
    if let Some(path) = err.path() {
        out.push(Detail::Path(path.display().to_string()));
    }
    if let Some((line, column)) = err.position() {
        out.push(Detail::Position { line, column });
    }
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    if !causes.is_empty() {
        out.push(Detail::Causes(causes));
    }
    out
}

fn headline(err: &Error) -> String {
    match (err.message(), err.kind()) {
        (Some(message), _) => message.to_string(),
        (None, ErrorKind::Usage) => "usage error".to_string(),
        (None, ErrorKind::Parse) => "invalid json".to_string(),
        (None, ErrorKind::Io) => "i/o error".to_string(),
    }
}

pub(crate) fn render_text(err: &Error, use_color: bool) -> String {
    let label = |text: &str, color: &str| {
        if use_color {
            format!("\u{1b}[{color}m{text}\u{1b}[0m")
        } else {
            text.to_string()
        }
    };
    let mut lines = vec![format!("{} {}", label("error:", COLOR_ERROR), headline(err))];
    for detail in details(err) {
        let line = match detail {
            Detail::Hint(hint) => format!("{} {hint}", label("hint:", COLOR_DETAIL)),
            Detail::Path(path) => format!("{} {path}", label("path:", COLOR_DETAIL)),
            Detail::Position { line, column } => {
                format!("{} line {line}, column {column}", label("at:", COLOR_DETAIL))
            }
            // Terminal output shows the outermost cause only.
            Detail::Causes(causes) => {
                format!("{} {}", label("caused by:", COLOR_DETAIL), causes[0])
            }
        };
        lines.push(line);
    }
    lines.join("\n")
}

pub(crate) fn render_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(headline(err)));
    for detail in details(err) {
        match detail {
            Detail::Hint(hint) => inner.insert("hint".to_string(), json!(hint)),
            Detail::Path(path) => inner.insert("path".to_string(), json!(path)),
            Detail::Position { line, column } => {
                inner.insert("line".to_string(), json!(line));
                inner.insert("column".to_string(), json!(column))
            }
            Detail::Causes(causes) => inner.insert("causes".to_string(), json!(causes)),
        };
    }
    json!({ "error": inner })
}

pub(crate) fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", render_text(err, color_mode.use_color(is_tty)));
    } else {
        eprintln!("{}", render_json(err));
    }
}

/// Converts a clap parse failure into a Usage error, keeping clap's first line.
pub(crate) fn usage_error_from_clap(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let summary = rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.strip_prefix("error:").unwrap_or(line).trim().to_string())
        .unwrap_or_else(|| "invalid arguments".to_string());
    Error::new(ErrorKind::Usage)
        .with_message(summary)
        .with_hint("Try `hostjson --help` or `hostjson <command> --help`.")
}

#[cfg(test)]
mod tests {
    use super::{render_json, render_text};
    use hostjson::api::{Error, ErrorKind};

    fn parse_error() -> Error {
        let cause = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        Error::new(ErrorKind::Parse)
            .with_message("invalid json (truncated)")
            .with_path("doc.json")
            .with_position(1, 3)
            .with_source(cause)
    }

    #[test]
    fn text_rendering_lists_details_in_order() {
        let text = render_text(&parse_error(), false);
        let labels: Vec<&str> = text
            .lines()
            .map(|line| line.split(' ').next().unwrap_or(""))
            .collect();
        assert_eq!(labels, ["error:", "path:", "at:", "caused"]);
        assert!(text.starts_with(
            "error: invalid json (truncated)\npath: doc.json\nat: line 1, column 3"
        ));
    }

    #[test]
    fn json_rendering_matches_text_details() {
        let value = render_json(&parse_error());
        let inner = &value["error"];
        assert_eq!(inner["kind"], "Parse");
        assert_eq!(inner["path"], "doc.json");
        assert_eq!(inner["line"], 1);
        assert_eq!(inner["column"], 3);
        assert_eq!(inner["causes"].as_array().map(Vec::len), Some(1));
        assert!(inner.get("hint").is_none());
    }

    #[test]
    fn missing_message_falls_back_to_kind() {
        let text = render_text(&Error::new(ErrorKind::Io), true);
        assert_eq!(text, "\u{1b}[31merror:\u{1b}[0m i/o error");
    }
}
