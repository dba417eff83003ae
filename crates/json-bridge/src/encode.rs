//! Native value → JSON.
//!
//! Encoding never fails. Values without a natural JSON shape fall back to
//! their text form.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::warn;
use serde_json::{Map, Number, Value};

use crate::builder::{ArrayBuilder, ObjectBuilder};
use crate::composite::{CborCompositeCodec, CompositeCodec, CompositeData, DEFAULT_SENTINEL};
use crate::value::{NativeMap, NativeValue};

static DEFAULT_CODEC: CborCompositeCodec = CborCompositeCodec;

/// Encodes native values, serializing composites with the given codec.
#[derive(Clone, Copy)]
pub struct Encoder<'a> {
    codec: &'a dyn CompositeCodec,
    sentinel: &'a str,
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Self {
            codec: &DEFAULT_CODEC,
            sentinel: DEFAULT_SENTINEL,
        }
    }
}

impl<'a> Encoder<'a> {
    pub fn new(codec: &'a dyn CompositeCodec, sentinel: &'a str) -> Self {
        Self { codec, sentinel }
    }

    pub fn encode_value(&self, value: &NativeValue) -> Value {
        match value {
            NativeValue::Int32(n) => Value::from(*n),
            NativeValue::Int64(n) => Value::from(*n),
            NativeValue::Float64(n) => float_value(*n),
            NativeValue::String(s) => Value::String(s.clone()),
            NativeValue::Bool(b) => Value::Bool(*b),
            NativeValue::Map(map) => Value::Object(self.encode_map(Some(map))),
            NativeValue::Int16(n) => Value::from(*n),
            NativeValue::Int8(n) => Value::from(i16::from(*n)),
            NativeValue::Float32(n) => float_value(f64::from(*n)),
            NativeValue::Interned(s) => Value::String(s.to_string()),
            NativeValue::Null => Value::Null,
            NativeValue::Bytes(bytes) => bytes_to_json_array(Some(bytes.as_slice())).build_value(),
            NativeValue::Composite(items) => self.encode_composites(items),
            NativeValue::Array(items) => Value::Array(self.encode_array(items)),
            NativeValue::Json(json) => json.clone(),
            NativeValue::Chars(chars) => Value::String(chars.iter().collect()),
            NativeValue::Other(text) => Value::String(text.clone()),
        }
    }

    pub fn encode_into_object(&self, key: &str, value: &NativeValue, builder: &mut ObjectBuilder) {
        builder.add(key, self.encode_value(value));
    }

    pub fn encode_into_array(&self, value: &NativeValue, builder: &mut ArrayBuilder) {
        builder.add(self.encode_value(value));
    }

    pub fn encode_array(&self, values: &[NativeValue]) -> Vec<Value> {
        let mut builder = ArrayBuilder::with_capacity(values.len());
        for value in values {
            self.encode_into_array(value, &mut builder);
        }
        builder.build()
    }

    /// Encode a map as a JSON object. `None` gives an empty object.
    pub fn encode_map(&self, map: Option<&NativeMap>) -> Map<String, Value> {
        let mut builder = ObjectBuilder::new();
        for (key, value) in map.into_iter().flatten() {
            self.encode_into_object(key, value, &mut builder);
        }
        builder.build()
    }

    fn encode_composites(&self, items: &[CompositeData]) -> Value {
        let mut blobs = ArrayBuilder::with_capacity(items.len());
        for item in items {
            match self.codec.encode(item) {
                Ok(bytes) => {
                    blobs.add(STANDARD.encode(bytes));
                }
                Err(err) => {
                    warn!("encoding composite `{}` as null: {err}", item.type_name());
                    blobs.add_null();
                }
            }
        }
        let mut wrapper = ObjectBuilder::new();
        wrapper.add(self.sentinel, blobs);
        wrapper.build_value()
    }
}

/// JSON has no NaN or infinities, so those keep their text form.
fn float_value(n: f64) -> Value {
    Number::from_f64(n).map_or_else(|| Value::String(n.to_string()), Value::Number)
}

pub fn encode_value(value: &NativeValue) -> Value {
    Encoder::default().encode_value(value)
}

pub fn encode_into_object(key: &str, value: &NativeValue, builder: &mut ObjectBuilder) {
    Encoder::default().encode_into_object(key, value, builder);
}

pub fn encode_into_array(value: &NativeValue, builder: &mut ArrayBuilder) {
    Encoder::default().encode_into_array(value, builder);
}

pub fn encode_array(values: &[NativeValue]) -> Vec<Value> {
    Encoder::default().encode_array(values)
}

pub fn encode_map(map: Option<&NativeMap>) -> Map<String, Value> {
    Encoder::default().encode_map(map)
}

/// Alias of [`encode_map`].
pub fn to_json_object(map: Option<&NativeMap>) -> Map<String, Value> {
    encode_map(map)
}

/// Encode a list of strings as a JSON array. `None` gives an empty array.
pub fn encode_string_list(strings: Option<&[String]>) -> Vec<Value> {
    let mut builder = ArrayBuilder::new();
    for s in strings.into_iter().flatten() {
        builder.add(s.as_str());
    }
    builder.build()
}

/// Encode bytes as signed numbers in `[-128, 127]`.
pub fn bytes_to_json_array(bytes: Option<&[u8]>) -> ArrayBuilder {
    let bytes = bytes.unwrap_or_default();
    let mut builder = ArrayBuilder::with_capacity(bytes.len());
    for &byte in bytes {
        builder.add(i16::from(byte as i8));
    }
    builder
}

impl From<&NativeValue> for Value {
    fn from(value: &NativeValue) -> Self {
        encode_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bytes_are_signed() {
        let arr = bytes_to_json_array(Some(&[0u8, 1, 127, 128, 255][..])).build_value();
        assert_eq!(arr, json!([0, 1, 127, -128, -1]));
        assert!(bytes_to_json_array(None).is_empty());
    }

    #[test]
    fn test_non_finite_floats_use_text() {
        assert_eq!(encode_value(&NativeValue::Float64(f64::NAN)), json!("NaN"));
        assert_eq!(encode_value(&NativeValue::Float32(f32::INFINITY)), json!("inf"));
    }

    #[test]
    fn test_float32_is_widened() {
        assert_eq!(
            encode_value(&NativeValue::Float32(0.5)),
            Value::Number(Number::from_f64(0.5).unwrap())
        );
    }

    #[test]
    fn test_encode_string_list() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Value::Array(encode_string_list(Some(list.as_slice()))), json!(["a", "b"]));
        assert!(encode_string_list(None).is_empty());
    }

    struct FailingCodec;

    impl CompositeCodec for FailingCodec {
        fn encode(&self, _: &CompositeData) -> Result<Vec<u8>, crate::CompositeError> {
            Err(crate::CompositeError::Serialize("nope".into()))
        }

        fn decode(
            &self,
            _: &[u8],
            _: &crate::AllowList,
        ) -> Result<CompositeData, crate::CompositeError> {
            unreachable!()
        }
    }

    #[test]
    fn test_failing_composite_degrades_to_null() {
        let encoder = Encoder::new(&FailingCodec, "composite");
        let value = NativeValue::Composite(vec![CompositeData::new("x", Map::new())]);
        assert_eq!(encoder.encode_value(&value), json!({"composite": [null]}));
    }
}
