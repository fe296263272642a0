//! Purpose: Convert parsed JSON values into the native `HostValue` graph.
//! Exports: `convert`, `convert_ref`, `parse_json`, `parse_json_slice`.
//! Role: Pure recursive type dispatch; the only place JSON containers are rebuilt.
//! Invariants: Objects become fresh maps, arrays fresh fixed-length sequences.
//! Invariants: Scalars pass through unchanged; owned scalars are moved, not copied.
//! Invariants: Parser errors are returned as-is; this module defines none of its own.
use serde_json::Value;
use tracing::debug;

use crate::core::value::{HostMap, HostValue};
use crate::json::parse;

/// Converts an owned parsed value, consuming it.
pub fn convert(value: Value) -> HostValue {
    match value {
        Value::Object(object) => {
            let mut map = HostMap::new();
            for (key, child) in object {
                map.insert(key, convert(child));
            }
            HostValue::Map(map)
        }
        Value::Array(items) => HostValue::Array(items.into_iter().map(convert).collect()),
        Value::String(s) => HostValue::String(s),
        Value::Number(n) => HostValue::Number(n),
        Value::Bool(b) => HostValue::Bool(b),
        Value::Null => HostValue::Null,
    }
}

/// Converts a borrowed parsed value; the input is left untouched.
pub fn convert_ref(value: &Value) -> HostValue {
    match value {
        Value::Object(object) => HostValue::Map(
            object
                .iter()
                .map(|(key, child)| (key.clone(), convert_ref(child)))
                .collect(),
        ),
        Value::Array(items) => HostValue::Array(items.iter().map(convert_ref).collect()),
        Value::String(s) => HostValue::String(s.clone()),
        Value::Number(n) => HostValue::Number(n.clone()),
        Value::Bool(b) => HostValue::Bool(*b),
        Value::Null => HostValue::Null,
    }
}

/// Parses JSON text and converts it; parser errors are returned unchanged.
pub fn parse_json(text: &str) -> Result<HostValue, serde_json::Error> {
    debug!(bytes = text.len(), "parsing json text");
    let value: Value = parse::from_str(text)?;
    Ok(convert_logged(value))
}

/// Same as [`parse_json`] for raw bytes; UTF-8 is validated by the parser.
pub fn parse_json_slice(bytes: &[u8]) -> Result<HostValue, serde_json::Error> {
    debug!(bytes = bytes.len(), "parsing json bytes");
    let value: Value = parse::from_slice(bytes)?;
    Ok(convert_logged(value))
}

fn convert_logged(value: Value) -> HostValue {
    let converted = convert(value);
    debug!(kind = converted.kind().label(), "converted json value");
    converted
}
