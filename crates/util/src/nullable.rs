//! A JSON string value whose backing text may be absent.

use crate::json_type::JsonType;
use crate::strings::as_string;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// A string-shaped JSON value that reports type `null` when its backing
/// string is absent or empty.
///
/// The quoted, escaped text form is computed on the first call to
/// [`to_text`](Self::to_text) and kept for the lifetime of the value. The
/// input never changes, so the cached text never needs invalidating.
///
/// # Examples
///
/// ```
/// use json_bridge_util::{JsonType, NullableJsonString};
///
/// assert_eq!(NullableJsonString::new(Some("")).value_type(), JsonType::Null);
/// assert_eq!(NullableJsonString::new(None).to_text(), None);
///
/// let s = NullableJsonString::new(Some("a\"b"));
/// assert_eq!(s.value_type(), JsonType::String);
/// assert_eq!(s.to_text(), Some("\"a\\\"b\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullableJsonString {
    value: Option<String>,
    text: OnceLock<String>,
}

impl NullableJsonString {
    pub fn new(input: Option<&str>) -> Self {
        Self {
            value: input.filter(|s| !s.is_empty()).map(str::to_owned),
            text: OnceLock::new(),
        }
    }

    /// `Null` for an absent or empty backing string, `String` otherwise.
    pub fn value_type(&self) -> JsonType {
        if self.value.is_some() {
            JsonType::String
        } else {
            JsonType::Null
        }
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// The raw backing string.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The JSON text form: the escaped content wrapped in quotes, or `None`
    /// when the value is null.
    pub fn to_text(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        Some(self.text.get_or_init(|| as_string(value)))
    }

    pub fn to_value(&self) -> Value {
        match &self.value {
            Some(s) => Value::String(s.clone()),
            None => Value::Null,
        }
    }
}

impl PartialEq for NullableJsonString {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for NullableJsonString {}

impl fmt::Display for NullableJsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text().unwrap_or("null"))
    }
}

impl From<&str> for NullableJsonString {
    fn from(s: &str) -> Self {
        Self::new(Some(s))
    }
}

impl From<Option<&str>> for NullableJsonString {
    fn from(s: Option<&str>) -> Self {
        Self::new(s)
    }
}

impl From<NullableJsonString> for Value {
    fn from(s: NullableJsonString) -> Self {
        match s.value {
            Some(s) => Value::String(s),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_are_null() {
        for s in [NullableJsonString::new(None), NullableJsonString::new(Some(""))] {
            assert!(s.is_null());
            assert_eq!(s.value_type(), JsonType::Null);
            assert_eq!(s.as_str(), None);
            assert_eq!(s.to_text(), None);
            assert_eq!(s.to_string(), "null");
            assert_eq!(Value::from(s), Value::Null);
        }
    }

    #[test]
    fn test_text_is_memoized() {
        let s = NullableJsonString::from("line\nbreak");
        let first = s.to_text().unwrap();
        let second = s.to_text().unwrap();
        assert_eq!(first, "\"line\\nbreak\"");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a = NullableJsonString::from("x");
        let b = NullableJsonString::from("x");
        let _ = a.to_text();
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_value() {
        assert_eq!(Value::from(NullableJsonString::from("x")), Value::String("x".into()));
        assert_eq!(NullableJsonString::from("x").to_value(), Value::String("x".into()));
    }
}
