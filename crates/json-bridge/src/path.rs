//! Nesting a value under a slash-delimited key path.

use log::debug;
use serde_json::Value;

use crate::builder::ObjectBuilder;
use crate::error::JsonBridgeError;

/// Build `{"a": {"b": {"c": value}}}` from the path `a/b/c`.
///
/// The returned builder holds the outermost key, so callers can keep adding
/// siblings before building.
///
/// # Errors
///
/// An empty path, or a path with an empty segment (`/a`, `a//b`, `a/`), is
/// rejected rather than producing an empty key.
///
/// # Examples
///
/// ```
/// use json_bridge::build_at_path;
/// use serde_json::json;
///
/// let obj = build_at_path("broker/queues/orders", json!("ok")).unwrap();
/// assert_eq!(obj.build_value(), json!({"broker": {"queues": {"orders": "ok"}}}));
///
/// assert!(build_at_path("", json!(1)).is_err());
/// ```
pub fn build_at_path(path: &str, value: Value) -> Result<ObjectBuilder, JsonBridgeError> {
    if path.is_empty() {
        return Err(JsonBridgeError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('/').collect();
    if let Some(index) = segments.iter().position(|segment| segment.is_empty()) {
        return Err(JsonBridgeError::EmptyPathSegment {
            path: path.to_owned(),
            index,
        });
    }
    let (first, rest) = segments.split_first().ok_or(JsonBridgeError::EmptyPath)?;
    debug!("nesting value under {} path segments", segments.len());

    let nested = rest.iter().rev().fold(value, |inner, segment| {
        let mut wrapper = ObjectBuilder::new();
        wrapper.add(*segment, inner);
        wrapper.build_value()
    });

    let mut builder = ObjectBuilder::new();
    builder.add(*first, nested);
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_segment_is_flat() {
        let obj = build_at_path("status", json!({"up": true})).unwrap();
        assert_eq!(obj.build_value(), json!({"status": {"up": true}}));
    }

    #[test]
    fn test_three_segments() {
        let obj = build_at_path("a/b/c", json!("v")).unwrap();
        assert_eq!(obj.build_value(), json!({"a": {"b": {"c": "v"}}}));
    }

    #[test]
    fn test_builder_accepts_siblings() {
        let mut obj = build_at_path("a/b", json!(1)).unwrap();
        obj.add("z", 2);
        assert_eq!(obj.build_value(), json!({"a": {"b": 1}, "z": 2}));
    }

    #[test]
    fn test_empty_segments_rejected() {
        for (path, at) in [("/a", 0), ("a//b", 1), ("a/b/", 2), ("/", 0)] {
            match build_at_path(path, json!(1)) {
                Err(JsonBridgeError::EmptyPathSegment { index, .. }) => assert_eq!(index, at, "{path}"),
                other => panic!("{path}: unexpected {other:?}"),
            }
        }
        assert!(matches!(build_at_path("", json!(1)), Err(JsonBridgeError::EmptyPath)));
    }
}
