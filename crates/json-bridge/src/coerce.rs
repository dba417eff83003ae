//! Adapting loosely typed values to an expected field type.
//!
//! Coercion never fails: an unknown target falls back to `Int64` for numbers
//! and everything that is not a number, string, boolean or array passes
//! through.

use serde_json::{Number, Value};

use crate::value::{NativeValue, TypeTag};

#[derive(Debug, Clone, Copy)]
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    fn of_json(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            Numeric::Int(i)
        } else if let Some(u) = n.as_u64() {
            Numeric::Int(u as i64)
        } else {
            Numeric::Float(n.as_f64().unwrap_or(0.0))
        }
    }

    fn of_native(value: &NativeValue) -> Option<Self> {
        value
            .as_i64()
            .map(Numeric::Int)
            .or_else(|| value.as_f64().map(Numeric::Float))
    }

    // Narrowing keeps the low-order bits; float to integer truncates toward
    // zero and saturates at the `i32` range before narrowing to `i16`.
    fn coerce(self, target: Option<TypeTag>) -> NativeValue {
        match (target, self) {
            (Some(TypeTag::Int32), Numeric::Int(i)) => NativeValue::Int32(i as i32),
            (Some(TypeTag::Int32), Numeric::Float(f)) => NativeValue::Int32(f as i32),
            (Some(TypeTag::Int16), Numeric::Int(i)) => NativeValue::Int16(i as i16),
            (Some(TypeTag::Int16), Numeric::Float(f)) => NativeValue::Int16((f as i32) as i16),
            (Some(TypeTag::Float64), Numeric::Int(i)) => NativeValue::Float64(i as f64),
            (Some(TypeTag::Float64), Numeric::Float(f)) => NativeValue::Float64(f),
            (_, Numeric::Int(i)) => NativeValue::Int64(i),
            (_, Numeric::Float(f)) => NativeValue::Int64(f as i64),
        }
    }
}

/// Coerce a JSON value towards `target`.
///
/// # Examples
///
/// ```
/// use json_bridge::{coerce_json, NativeValue, TypeTag};
/// use serde_json::json;
///
/// assert_eq!(coerce_json(&json!(42), Some(TypeTag::Int32)), NativeValue::Int32(42));
/// assert_eq!(coerce_json(&json!(42), None), NativeValue::Int64(42));
/// assert_eq!(coerce_json(&json!("42"), Some(TypeTag::Int32)), NativeValue::from("42"));
/// ```
pub fn coerce_json(value: &Value, target: Option<TypeTag>) -> NativeValue {
    match value {
        Value::Number(n) => Numeric::of_json(n).coerce(target),
        Value::String(s) => NativeValue::String(s.clone()),
        Value::Bool(b) => NativeValue::Bool(*b),
        Value::Array(items) => {
            NativeValue::Array(items.iter().map(|item| coerce_json(item, target)).collect())
        }
        Value::Null => NativeValue::Null,
        Value::Object(_) => NativeValue::Json(value.clone()),
    }
}

/// Coerce a native value towards `target`. Wrapped JSON goes through
/// [`coerce_json`].
pub fn coerce(value: &NativeValue, target: Option<TypeTag>) -> NativeValue {
    match value {
        NativeValue::Json(json) => coerce_json(json, target),
        NativeValue::Array(items) => {
            NativeValue::Array(items.iter().map(|item| coerce(item, target)).collect())
        }
        other => match Numeric::of_native(other) {
            Some(n) => n.coerce(target),
            None => other.clone(),
        },
    }
}
