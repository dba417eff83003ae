//! json-bridge - translate between a native dynamic value model and JSON.
//!
//! The crate has two halves:
//!
//! - value translation: [`encode`] turns [`NativeValue`]s into `serde_json`
//!   values, [`decode`] goes the other way, [`coerce`] adapts loose JSON
//!   scalars to an expected field type;
//! - structural editing of JSON objects: [`merge`] (update-wins deep merge)
//!   and [`path`] (nesting a value under `a/b/c`).
//!
//! Opaque composite values travel as Base64 blobs under a sentinel key and are
//! only ever rebuilt through an injected [`CompositeCodec`] with an
//! [`AllowList`].
//!
//! # Example
//!
//! ```
//! use json_bridge::{decode_array, encode_array, NativeValue};
//!
//! let values = vec![NativeValue::Int32(7), NativeValue::from("seven")];
//! let json = encode_array(&values);
//! assert_eq!(serde_json::Value::Array(json.clone()), serde_json::json!([7, "seven"]));
//!
//! let back = decode_array(&json).unwrap();
//! assert_eq!(back, vec![NativeValue::Int64(7), NativeValue::from("seven")]);
//! ```

pub mod builder;
pub mod cli;
pub mod coerce;
pub mod composite;
pub mod decode;
pub mod encode;
pub mod error;
pub mod merge;
pub mod path;
pub mod read;
pub mod value;

pub use builder::{ArrayBuilder, ObjectBuilder};
pub use coerce::{coerce, coerce_json};
pub use composite::{
    AllowList, CborCompositeCodec, CompositeCodec, CompositeConfig, CompositeData, CompositeError,
    DEFAULT_ALLOW_LIST, DEFAULT_SENTINEL,
};
pub use decode::{decode_array, DecodeOptions, Decoder};
pub use encode::{
    bytes_to_json_array, encode_array, encode_into_array, encode_into_object, encode_map,
    encode_string_list, encode_value, to_json_object, Encoder,
};
pub use error::JsonBridgeError;
pub use merge::{merge, merge_with, MergeOptions, NullPolicy};
pub use path::build_at_path;
pub use read::{read_json_array, read_json_object, read_json_properties};
pub use value::{NativeMap, NativeValue, TypeTag};

pub use json_bridge_util::{truncate, truncate_string, JsonType, NullableJsonString, Truncatable};

/// Wrap a possibly absent string as a JSON value that is `null` when the
/// string is absent or empty.
///
/// ```
/// use json_bridge::{null_safe, JsonType};
///
/// assert_eq!(null_safe(Some("")).value_type(), JsonType::Null);
/// assert_eq!(null_safe(Some("x")).to_text(), Some("\"x\""));
/// ```
pub fn null_safe(input: Option<&str>) -> NullableJsonString {
    NullableJsonString::new(input)
}
