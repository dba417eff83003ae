//! Update-wins deep merge of JSON objects.
//!
//! A concrete update value always overrides the base value. Recursion only
//! happens where the update holds an object (merged into the base value), or
//! an array whose elements are objects (merged index by index into the base
//! array's elements). Inputs are never modified.

use log::trace;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// What an explicit `null` in the update document means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullPolicy {
    /// Ignore it; the base value stays.
    #[default]
    Skip,
    /// Apply it like any other scalar.
    Overwrite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub null_policy: NullPolicy,
}

/// Merge `update` over `base` with default options.
///
/// # Examples
///
/// ```
/// use json_bridge::merge;
/// use serde_json::{json, Value};
///
/// let base = json!({"a": {"x": 1, "y": 2}, "list": [{"x": 1}, {"x": 2}]});
/// let update = json!({"a": {"y": 3}, "list": [{"x": 9}]});
/// let merged = merge(base.as_object().unwrap(), update.as_object().unwrap());
/// assert_eq!(Value::Object(merged), json!({"a": {"x": 1, "y": 3}, "list": [{"x": 9}]}));
/// ```
pub fn merge(base: &Map<String, Value>, update: &Map<String, Value>) -> Map<String, Value> {
    merge_with(base, update, &MergeOptions::default())
}

pub fn merge_with(
    base: &Map<String, Value>,
    update: &Map<String, Value>,
    options: &MergeOptions,
) -> Map<String, Value> {
    trace!("merging {} update keys over {} base keys", update.len(), base.len());
    let mut merged = base.clone();
    for (key, value) in update {
        if value.is_null() && options.null_policy == NullPolicy::Skip {
            continue;
        }
        let next = match base.get(key) {
            None => value.clone(),
            Some(current) => merge_value(current, value, options),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

fn merge_value(base: &Value, update: &Value, options: &MergeOptions) -> Value {
    match update {
        Value::Object(update_obj) => Value::Object(merge_with(&object_or_empty(base), update_obj, options)),
        Value::Array(update_arr) => {
            let base_arr = base.as_array().map_or(&[][..], Vec::as_slice);
            let merged = update_arr
                .iter()
                .enumerate()
                .map(|(i, element)| match (base_arr.get(i), element) {
                    (Some(base_el), Value::Object(update_el)) => {
                        Value::Object(merge_with(&object_or_empty(base_el), update_el, options))
                    }
                    _ => element.clone(),
                })
                .collect();
            Value::Array(merged)
        }
        _ => update.clone(),
    }
}

/// A base value that is not an object merges like an empty one.
fn object_or_empty(value: &Value) -> Cow<'_, Map<String, Value>> {
    match value {
        Value::Object(map) => Cow::Borrowed(map),
        _ => Cow::Owned(Map::new()),
    }
}
