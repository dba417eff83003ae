//! JSON → native value.
//!
//! Numbers collapse to `Int64` (integral) or `Float64`. Object entries are
//! decoded one level deep: an object nested inside an object's entry comes
//! back as a map of raw [`NativeValue::Json`] values unless
//! [`DecodeOptions::recursive_objects`] is set. The composite sentinel is
//! honoured at both levels.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::trace;
use serde_json::{Map, Number, Value};

use crate::composite::{CborCompositeCodec, CompositeCodec, CompositeConfig, CompositeData};
use crate::error::JsonBridgeError;
use crate::value::{NativeMap, NativeValue};

static DEFAULT_CODEC: CborCompositeCodec = CborCompositeCodec;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Decode objects nested inside object entries all the way down instead
    /// of keeping their entries as raw JSON.
    pub recursive_objects: bool,
}

/// Decodes JSON arrays into native values, rebuilding composites through an
/// allow-listed codec.
pub struct Decoder<'a> {
    codec: &'a dyn CompositeCodec,
    config: CompositeConfig,
    options: DecodeOptions,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_CODEC, CompositeConfig::default())
    }
}

impl<'a> Decoder<'a> {
    pub fn new(codec: &'a dyn CompositeCodec, config: CompositeConfig) -> Self {
        Self {
            codec,
            config,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    pub fn decode_array(&self, array: &[Value]) -> Result<Vec<NativeValue>, JsonBridgeError> {
        array.iter().map(|value| self.decode_value(value)).collect()
    }

    pub fn decode_value(&self, value: &Value) -> Result<NativeValue, JsonBridgeError> {
        Ok(match value {
            Value::Array(items) => NativeValue::Array(self.decode_array(items)?),
            Value::Object(obj) => NativeValue::Map(self.decode_object(obj)?),
            Value::String(s) => NativeValue::String(s.clone()),
            Value::Bool(b) => NativeValue::Bool(*b),
            Value::Number(n) => decode_number(n),
            Value::Null => NativeValue::Null,
        })
    }

    fn decode_object(&self, obj: &Map<String, Value>) -> Result<NativeMap, JsonBridgeError> {
        let mut map = NativeMap::with_capacity(obj.len());
        for (key, value) in obj {
            let mut decoded = self.decode_entry(value)?;
            if *key == self.config.sentinel {
                decoded = NativeValue::Composite(self.decode_composites(decoded)?);
            }
            map.insert(key.clone(), decoded);
        }
        Ok(map)
    }

    fn decode_entry(&self, value: &Value) -> Result<NativeValue, JsonBridgeError> {
        Ok(match value {
            Value::Array(items) => NativeValue::Array(self.decode_array(items)?),
            Value::String(s) => NativeValue::String(s.clone()),
            Value::Bool(b) => NativeValue::Bool(*b),
            Value::Number(n) => decode_number(n),
            Value::Object(inner) if self.options.recursive_objects => {
                NativeValue::Map(self.decode_object(inner)?)
            }
            Value::Object(inner) => NativeValue::Map(self.decode_raw_object(inner)?),
            Value::Null if self.options.recursive_objects => NativeValue::Null,
            Value::Null => NativeValue::Json(Value::Null),
        })
    }

    // Entries stay raw JSON, except the sentinel so that composites held as
    // map values are still rebuilt.
    fn decode_raw_object(&self, obj: &Map<String, Value>) -> Result<NativeMap, JsonBridgeError> {
        let mut map = NativeMap::with_capacity(obj.len());
        for (key, value) in obj {
            let decoded = if *key == self.config.sentinel {
                NativeValue::Composite(self.decode_composites(self.decode_entry(value)?)?)
            } else {
                NativeValue::Json(value.clone())
            };
            map.insert(key.clone(), decoded);
        }
        Ok(map)
    }

    fn decode_composites(&self, decoded: NativeValue) -> Result<Vec<CompositeData>, JsonBridgeError> {
        let NativeValue::Array(items) = decoded else {
            return Err(JsonBridgeError::CompositeNotArray);
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let NativeValue::String(text) = item else {
                    return Err(JsonBridgeError::CompositeEntryNotString { index });
                };
                let bytes = STANDARD
                    .decode(text)
                    .map_err(|source| JsonBridgeError::Base64 { index, source })?;
                trace!("decoding composite {index} ({} bytes)", bytes.len());
                self.codec
                    .decode(&bytes, &self.config.allow_list)
                    .map_err(|source| JsonBridgeError::Composite { index, source })
            })
            .collect()
    }
}

/// Integral numbers become `Int64` (values above `i64::MAX` wrap), all
/// others `Float64`.
fn decode_number(n: &Number) -> NativeValue {
    if let Some(i) = n.as_i64() {
        NativeValue::Int64(i)
    } else if let Some(u) = n.as_u64() {
        NativeValue::Int64(u as i64)
    } else {
        NativeValue::Float64(n.as_f64().unwrap_or(0.0))
    }
}

/// Decode with the default CBOR codec and composite config.
pub fn decode_array(array: &[Value]) -> Result<Vec<NativeValue>, JsonBridgeError> {
    Decoder::default().decode_array(array)
}
