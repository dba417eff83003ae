//! Opaque composite values and the codec seam that (de)serializes them.
//!
//! Composite values travel inside JSON as `{ "<sentinel>": ["<base64>", ...] }`.
//! Turning those blobs back into values means deserializing untrusted input,
//! so every decode goes through a [`CompositeCodec`] together with an
//! [`AllowList`] of permitted type names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Object key that marks an array of encoded composite values.
pub const DEFAULT_SENTINEL: &str = "javax.management.openmbean.CompositeData";

/// Type-name prefixes accepted by default.
pub const DEFAULT_ALLOW_LIST: &str = "java.util,java.lang,javax.management";

/// A structured value that the JSON layer never looks inside: a type name plus
/// named items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeData {
    type_name: String,
    items: Map<String, Value>,
}

impl CompositeData {
    pub fn new(type_name: impl Into<String>, items: Map<String, Value>) -> Self {
        Self {
            type_name: type_name.into(),
            items,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn items(&self) -> &Map<String, Value> {
        &self.items
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompositeError {
    #[error("type `{0}` is not on the allow-list")]
    NotAllowed(String),
    #[error("malformed composite payload: {0}")]
    Malformed(String),
    #[error("composite serialization failed: {0}")]
    Serialize(String),
}

/// Turns composite values into bytes and back.
///
/// `decode` must reject any payload whose type name is not permitted by
/// `allow_list` before building a value from it.
pub trait CompositeCodec: Send + Sync {
    fn encode(&self, value: &CompositeData) -> Result<Vec<u8>, CompositeError>;

    fn decode(&self, bytes: &[u8], allow_list: &AllowList) -> Result<CompositeData, CompositeError>;
}

/// CBOR codec for [`CompositeData`].
///
/// The payload is a CBOR map with `type_name` and `items` entries. The type
/// name is checked against the allow-list on the generic CBOR tree, before any
/// typed value is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct CborCompositeCodec;

impl CompositeCodec for CborCompositeCodec {
    fn encode(&self, value: &CompositeData) -> Result<Vec<u8>, CompositeError> {
        let mut out = Vec::new();
        ciborium::into_writer(value, &mut out)
            .map_err(|e| CompositeError::Serialize(e.to_string()))?;
        Ok(out)
    }

    fn decode(&self, bytes: &[u8], allow_list: &AllowList) -> Result<CompositeData, CompositeError> {
        let raw: ciborium::Value =
            ciborium::from_reader(bytes).map_err(|e| CompositeError::Malformed(e.to_string()))?;
        let type_name = raw
            .as_map()
            .and_then(|entries| {
                entries
                    .iter()
                    .find(|(key, _)| key.as_text() == Some("type_name"))
            })
            .and_then(|(_, value)| value.as_text())
            .ok_or_else(|| CompositeError::Malformed("missing type name".to_owned()))?;
        if !allow_list.allows(type_name) {
            return Err(CompositeError::NotAllowed(type_name.to_owned()));
        }
        raw.deserialized()
            .map_err(|e| CompositeError::Malformed(e.to_string()))
    }
}

/// Comma-separated list of permitted type-name prefixes.
///
/// A type name is allowed when it equals an entry or lies below it
/// (`java.util` allows `java.util.HashMap`). The entry `*` allows everything.
///
/// # Examples
///
/// ```
/// use json_bridge::AllowList;
///
/// let allow: AllowList = "java.util, com.example".parse().unwrap();
/// assert!(allow.allows("java.util.HashMap"));
/// assert!(allow.allows("com.example"));
/// assert!(!allow.allows("java.utilities.Evil"));
/// assert!(!allow.allows("org.other.Type"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    prefixes: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// An allow-list that rejects every type.
    pub fn empty() -> Self {
        Self { prefixes: Vec::new() }
    }

    pub fn allows(&self, type_name: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            prefix == "*"
                || type_name
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOW_LIST.split(','))
    }
}

impl FromStr for AllowList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split(',').map(str::trim)))
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefixes.join(","))
    }
}

/// Where composites live in a document and which types may be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeConfig {
    pub sentinel: String,
    pub allow_list: AllowList,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_owned(),
            allow_list: AllowList::default(),
        }
    }
}
