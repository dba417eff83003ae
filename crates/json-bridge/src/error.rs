//! Error types for json-bridge.

use json_bridge_util::JsonType;
use thiserror::Error;

use crate::composite::CompositeError;

#[derive(Debug, Error)]
pub enum JsonBridgeError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(JsonType),
    #[error("expected a JSON array, found {0}")]
    NotAnArray(JsonType),
    #[error("composite entry must be an array of base64 strings")]
    CompositeNotArray,
    #[error("composite entry {index} is not a string")]
    CompositeEntryNotString { index: usize },
    #[error("composite entry {index} is not valid base64: {source}")]
    Base64 {
        index: usize,
        source: base64::DecodeError,
    },
    #[error("composite entry {index} could not be decoded: {source}")]
    Composite {
        index: usize,
        source: CompositeError,
    },
    #[error("path must not be empty")]
    EmptyPath,
    #[error("path `{path}` has an empty segment at position {index}")]
    EmptyPathSegment { path: String, index: usize },
}

impl JsonBridgeError {
    /// Index of the offending composite element, for composite decode failures.
    pub fn composite_index(&self) -> Option<usize> {
        match self {
            JsonBridgeError::CompositeEntryNotString { index }
            | JsonBridgeError::Base64 { index, .. }
            | JsonBridgeError::Composite { index, .. } => Some(*index),
            _ => None,
        }
    }
}
