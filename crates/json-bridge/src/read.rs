//! Parsing JSON text into the generic model.

use std::collections::HashMap;

use json_bridge_util::JsonType;
use log::trace;
use serde_json::{Map, Value};

use crate::error::JsonBridgeError;

/// Parse text that must hold a JSON object.
pub fn read_json_object(text: &str) -> Result<Map<String, Value>, JsonBridgeError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(JsonBridgeError::NotAnObject(JsonType::of(&other))),
    }
}

/// Parse text that must hold a JSON array.
pub fn read_json_array(text: &str) -> Result<Vec<Value>, JsonBridgeError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => Ok(items),
        other => Err(JsonBridgeError::NotAnArray(JsonType::of(&other))),
    }
}

/// Flatten a JSON object into a string map, one entry per top-level key.
///
/// Values keep their JSON text form, so a string value comes back quoted
/// (`{"a":"x"}` gives `a => "\"x\""`) and nested values come back compact.
/// `None` yields an empty map.
///
/// # Examples
///
/// ```
/// use json_bridge::read_json_properties;
///
/// let props = read_json_properties(Some(r#"{"port": 61616, "host": "local"}"#)).unwrap();
/// assert_eq!(props["port"], "61616");
/// assert_eq!(props["host"], "\"local\"");
/// assert!(read_json_properties(None).unwrap().is_empty());
/// ```
pub fn read_json_properties(text: Option<&str>) -> Result<HashMap<String, String>, JsonBridgeError> {
    let Some(text) = text else {
        return Ok(HashMap::new());
    };
    let map = read_json_object(text)?;
    trace!("flattening {} properties", map.len());
    Ok(map.into_iter().map(|(key, value)| (key, value.to_string())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_keeps_key_order() {
        let map = read_json_object(r#"{"z": 1, "a": 2}"#).unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_object_rejects_array() {
        let err = read_json_object("[1]").unwrap_err();
        assert!(matches!(err, JsonBridgeError::NotAnObject(JsonType::Array)));
    }

    #[test]
    fn test_array_rejects_object() {
        let err = read_json_array("{}").unwrap_err();
        assert!(matches!(err, JsonBridgeError::NotAnArray(JsonType::Object)));
    }

    #[test]
    fn test_array_parses() {
        assert_eq!(read_json_array("[1, \"a\", null]").unwrap(), vec![json!(1), json!("a"), Value::Null]);
    }

    #[test]
    fn test_malformed_is_parse_error() {
        assert!(matches!(read_json_object("{"), Err(JsonBridgeError::Parse(_))));
        assert!(matches!(read_json_properties(Some("nope")), Err(JsonBridgeError::Parse(_))));
    }

    #[test]
    fn test_properties_render_nested_compact() {
        let props = read_json_properties(Some(r#"{"n": {"a": [1, 2]}, "b": true, "z": null}"#)).unwrap();
        assert_eq!(props["n"], r#"{"a":[1,2]}"#);
        assert_eq!(props["b"], "true");
        assert_eq!(props["z"], "null");
    }
}
