//! json-bridge-util - leaf utilities for json-bridge
//!
//! Nothing in this crate depends on the native value model: these helpers
//! operate on plain strings, byte/char sequences and `serde_json` values.

pub mod json_type;
pub mod nullable;
pub mod strings;
pub mod truncate;

// Re-exports for convenience
pub use json_type::JsonType;
pub use nullable::NullableJsonString;
pub use strings::{as_string, escape};
pub use truncate::{truncate, truncate_string, Truncatable};
