//! Incremental construction of JSON objects and arrays.
//!
//! Builders accumulate into an owned staging collection; `build()` hands the
//! finished value over and the builder is consumed.

use serde_json::{Map, Value};

/// Accumulates key/value pairs into a JSON object, keeping insertion order.
///
/// Adding a key twice replaces the earlier value in place.
///
/// # Examples
///
/// ```
/// use json_bridge::{ArrayBuilder, ObjectBuilder};
/// use serde_json::json;
///
/// let mut tags = ArrayBuilder::new();
/// tags.add("a").add("b");
///
/// let mut obj = ObjectBuilder::new();
/// obj.add("name", "queue").add("tags", tags).add_null("owner");
/// assert_eq!(obj.build_value(), json!({"name": "queue", "tags": ["a", "b"], "owner": null}));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectBuilder {
    map: Map<String, Value>,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn add_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.map.insert(key.into(), Value::Null);
        self
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn build(self) -> Map<String, Value> {
        self.map
    }

    pub fn build_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl From<ObjectBuilder> for Value {
    fn from(builder: ObjectBuilder) -> Self {
        builder.build_value()
    }
}

/// Accumulates values into a JSON array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayBuilder {
    items: Vec<Value>,
}

impl ArrayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    pub fn add_null(&mut self) -> &mut Self {
        self.items.push(Value::Null);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> Vec<Value> {
        self.items
    }

    pub fn build_value(self) -> Value {
        Value::Array(self.items)
    }
}

impl From<ArrayBuilder> for Value {
    fn from(builder: ArrayBuilder) -> Self {
        builder.build_value()
    }
}
