//! Purpose: Define the native value graph produced by conversion.
//! Exports: `HostValue`, `HostMap`, `ValueKind`.
//! Role: Plain tagged union the rest of the crate (and callers) consume.
//! Invariants: Maps and arrays are distinct variants; scalars are never containers.
//! Invariants: Numbers keep the parser's representation (no int/float coercion).
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Mapping container for converted JSON objects.
///
/// Keys iterate in sorted order regardless of their order in the source text.
pub type HostMap = BTreeMap<String, HostValue>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Box<[HostValue]>),
    Map(HostMap),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Map,
}

impl ValueKind {
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Map)
    }
}

impl HostValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            HostValue::Null => ValueKind::Null,
            HostValue::Bool(_) => ValueKind::Bool,
            HostValue::Number(_) => ValueKind::Number,
            HostValue::String(_) => ValueKind::String,
            HostValue::Array(_) => ValueKind::Array,
            HostValue::Map(_) => ValueKind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, HostValue::Map(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, HostValue::Array(_))
    }

    pub fn is_scalar(&self) -> bool {
        !self.kind().is_composite()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            HostValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HostMap> {
        match self {
            HostValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key when this value is a map.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        self.as_map()?.get(key)
    }

    /// Looks up an element when this value is an array.
    pub fn get_index(&self, index: usize) -> Option<&HostValue> {
        self.as_array()?.get(index)
    }

    /// Number of children for composites; `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            HostValue::Array(items) => Some(items.len()),
            HostValue::Map(map) => Some(map.len()),
            _ => None,
        }
    }
}

impl From<Value> for HostValue {
    fn from(value: Value) -> Self {
        crate::core::convert::convert(value)
    }
}

impl From<&Value> for HostValue {
    fn from(value: &Value) -> Self {
        crate::core::convert::convert_ref(value)
    }
}

impl From<HostValue> for Value {
    fn from(value: HostValue) -> Self {
        match value {
            HostValue::Null => Value::Null,
            HostValue::Bool(b) => Value::Bool(b),
            HostValue::Number(n) => Value::Number(n),
            HostValue::String(s) => Value::String(s),
            HostValue::Array(items) => {
                Value::Array(items.into_vec().into_iter().map(Value::from).collect())
            }
            HostValue::Map(map) => {
                let out: Map<String, Value> =
                    map.into_iter().map(|(k, v)| (k, Value::from(v))).collect();
                Value::Object(out)
            }
        }
    }
}

impl From<&HostValue> for Value {
    fn from(value: &HostValue) -> Self {
        value.clone().into()
    }
}
