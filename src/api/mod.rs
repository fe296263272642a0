//! Purpose: Define the stable public Rust API boundary for hostjson.
//! Exports: Value model, conversion entry points, shape summary, parse diagnostics.
//! Role: Public, additive-only surface used by the CLI and downstream callers.
//! Invariants: Everything the binary needs is reachable from this module.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::convert::{convert, convert_ref, parse_json, parse_json_slice};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::shape::{Shape, shape};
pub use crate::core::value::{HostMap, HostValue, ValueKind};
pub use crate::json::parse::{
    ParseFailureCategory, categorize_error, categorize_message, hint_for_error,
};
