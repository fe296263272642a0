//! Purpose: Render a converted value graph as an indented outline for terminals.
//! Exports: `render_tree`.
//! Role: Shows what conversion produced (maps, sequences, scalars) rather than JSON text.
//! Invariants: One line per node; composites report their child count.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use hostjson::api::HostValue;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

const COLOR_COMPOSITE: &str = "36";
const COLOR_LABEL: &str = "33";
const COLOR_SCALAR: &str = "32";

pub(crate) fn render_tree(value: &HostValue, use_color: bool) -> String {
    let mut lines = vec![describe(value, use_color)];
    push_children(value, "", use_color, &mut lines);
    lines.join("\n")
}

fn push_children(value: &HostValue, prefix: &str, use_color: bool, lines: &mut Vec<String>) {
    let children: Vec<(String, &HostValue)> = match value {
        HostValue::Map(map) => map
            .iter()
            .map(|(key, child)| (format!("{}:", quote(key)), child))
            .collect(),
        HostValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, child)| (format!("[{idx}]"), child))
            .collect(),
        _ => return,
    };
    let last = children.len().saturating_sub(1);
    for (idx, (label, child)) in children.into_iter().enumerate() {
        let (branch, indent) = if idx == last {
            (LAST_BRANCH, GAP)
        } else {
            (BRANCH, PIPE)
        };
        lines.push(format!(
            "{prefix}{branch}{} {}",
            paint(&label, COLOR_LABEL, use_color),
            describe(child, use_color)
        ));
        push_children(child, &format!("{prefix}{indent}"), use_color, lines);
    }
}

fn describe(value: &HostValue, use_color: bool) -> String {
    let (text, color) = match value {
        HostValue::Map(map) => (counted("map", map.len(), "key"), COLOR_COMPOSITE),
        HostValue::Array(items) => (counted("array", items.len(), "item"), COLOR_COMPOSITE),
        HostValue::String(s) => (quote(s), COLOR_SCALAR),
        HostValue::Number(n) => (n.to_string(), COLOR_SCALAR),
        HostValue::Bool(b) => (b.to_string(), COLOR_SCALAR),
        HostValue::Null => ("null".to_string(), COLOR_SCALAR),
    };
    paint(&text, color, use_color)
}

fn counted(kind: &str, len: usize, noun: &str) -> String {
    let plural = if len == 1 { "" } else { "s" };
    format!("{kind} ({len} {noun}{plural})")
}

fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("\u{1b}[{color}m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}
