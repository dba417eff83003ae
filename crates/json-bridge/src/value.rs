//! [`NativeValue`]: the host-side dynamic value model.

use indexmap::IndexMap;
use json_bridge_util::{truncate, Truncatable};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::composite::CompositeData;

/// String-keyed map of native values, iterated in insertion order.
pub type NativeMap = IndexMap<String, NativeValue>;

/// A dynamically typed native value.
///
/// Numeric widths are kept apart because they decide the JSON number shape
/// produced by the encoder. Decoding only ever yields `Int64` and `Float64`.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    /// A string-like wrapper around shared text, encoded as its text.
    Interned(Arc<str>),
    /// A byte sequence. Encoded as signed numbers in `[-128, 127]`.
    Bytes(Vec<u8>),
    /// A character sequence.
    Chars(Vec<char>),
    Array(Vec<NativeValue>),
    Map(NativeMap),
    /// Opaque composite values, carried under the sentinel key.
    Composite(Vec<CompositeData>),
    /// A value that is already in JSON form.
    Json(Value),
    /// The text form of a value the model has no variant for.
    Other(String),
}

impl NativeValue {
    /// Capture the `Display` text of an arbitrary value.
    pub fn other(value: &impl fmt::Display) -> Self {
        NativeValue::Other(value.to_string())
    }

    pub fn interned(text: impl Into<Arc<str>>) -> Self {
        NativeValue::Interned(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, NativeValue::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            NativeValue::Int8(_)
                | NativeValue::Int16(_)
                | NativeValue::Int32(_)
                | NativeValue::Int64(_)
                | NativeValue::Float32(_)
                | NativeValue::Float64(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s.as_str()),
            NativeValue::Interned(s) => Some(&s[..]),
            _ => None,
        }
    }

    /// Integral value of any integer variant.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            NativeValue::Int8(n) => Some(n.into()),
            NativeValue::Int16(n) => Some(n.into()),
            NativeValue::Int32(n) => Some(n.into()),
            NativeValue::Int64(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            NativeValue::Float32(n) => Some(n.into()),
            NativeValue::Float64(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&NativeMap> {
        match self {
            NativeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[NativeValue]> {
        match self {
            NativeValue::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            NativeValue::Null => "null",
            NativeValue::Bool(_) => "bool",
            NativeValue::Int8(_) => "int8",
            NativeValue::Int16(_) => "int16",
            NativeValue::Int32(_) => "int32",
            NativeValue::Int64(_) => "int64",
            NativeValue::Float32(_) => "float32",
            NativeValue::Float64(_) => "float64",
            NativeValue::String(_) => "string",
            NativeValue::Interned(_) => "interned",
            NativeValue::Bytes(_) => "bytes",
            NativeValue::Chars(_) => "chars",
            NativeValue::Array(_) => "array",
            NativeValue::Map(_) => "map",
            NativeValue::Composite(_) => "composite",
            NativeValue::Json(_) => "json",
            NativeValue::Other(_) => "other",
        }
    }

    /// Size-bound strings, byte sequences and char sequences to `limit`
    /// elements, e.g. before logging a value. `Null` becomes an empty string
    /// and a negative limit leaves everything unchanged.
    pub fn truncated(&self, limit: i32) -> NativeValue {
        let input = match self {
            NativeValue::Null => None,
            NativeValue::String(s) => Some(Truncatable::Str(s.clone())),
            NativeValue::Bytes(bytes) => Some(Truncatable::Bytes(bytes.clone())),
            NativeValue::Chars(chars) => Some(Truncatable::Chars(chars.clone())),
            other => return other.clone(),
        };
        match truncate(input, limit) {
            Truncatable::Str(s) => NativeValue::String(s),
            Truncatable::Bytes(bytes) => NativeValue::Bytes(bytes),
            Truncatable::Chars(chars) => NativeValue::Chars(chars),
            Truncatable::Other(value) => NativeValue::Json(value),
        }
    }
}

impl From<bool> for NativeValue {
    fn from(b: bool) -> Self {
        NativeValue::Bool(b)
    }
}

impl From<i8> for NativeValue {
    fn from(n: i8) -> Self {
        NativeValue::Int8(n)
    }
}

impl From<i16> for NativeValue {
    fn from(n: i16) -> Self {
        NativeValue::Int16(n)
    }
}

impl From<i32> for NativeValue {
    fn from(n: i32) -> Self {
        NativeValue::Int32(n)
    }
}

impl From<i64> for NativeValue {
    fn from(n: i64) -> Self {
        NativeValue::Int64(n)
    }
}

impl From<f32> for NativeValue {
    fn from(n: f32) -> Self {
        NativeValue::Float32(n)
    }
}

impl From<f64> for NativeValue {
    fn from(n: f64) -> Self {
        NativeValue::Float64(n)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::String(s.to_owned())
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::String(s)
    }
}

impl From<Vec<u8>> for NativeValue {
    fn from(bytes: Vec<u8>) -> Self {
        NativeValue::Bytes(bytes)
    }
}

impl From<Vec<NativeValue>> for NativeValue {
    fn from(items: Vec<NativeValue>) -> Self {
        NativeValue::Array(items)
    }
}

impl From<NativeMap> for NativeValue {
    fn from(map: NativeMap) -> Self {
        NativeValue::Map(map)
    }
}

impl From<Vec<CompositeData>> for NativeValue {
    fn from(items: Vec<CompositeData>) -> Self {
        NativeValue::Composite(items)
    }
}

impl From<Value> for NativeValue {
    fn from(value: Value) -> Self {
        NativeValue::Json(value)
    }
}

impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(NativeValue::Null, Into::into)
    }
}

impl FromIterator<(String, NativeValue)> for NativeValue {
    fn from_iter<I: IntoIterator<Item = (String, NativeValue)>>(iter: I) -> Self {
        NativeValue::Map(iter.into_iter().collect())
    }
}

/// Target type for [`coerce`](crate::coerce::coerce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int16,
    Int32,
    Int64,
    Float64,
    String,
    Bool,
}
