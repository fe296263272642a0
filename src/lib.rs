//! Purpose: Library crate behind the `hostjson` CLI and its tests.
//! Exports: `core` (value model, conversion, shape, errors) and the `api` facade.
//! Role: Turn parsed JSON into plain native value graphs callers can own.
//! Invariants: Conversion is pure and stateless; no hidden globals.
//! Invariants: Parser errors surface unmodified from the conversion entry points.
pub mod api;
pub mod core;
pub(crate) mod json;

pub use crate::core::convert::{convert, convert_ref, parse_json, parse_json_slice};
pub use crate::core::value::{HostMap, HostValue, ValueKind};
