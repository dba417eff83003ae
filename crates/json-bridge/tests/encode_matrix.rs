use json_bridge::{
    encode_array, encode_into_array, encode_into_object, encode_map, encode_value, to_json_object,
    ArrayBuilder, CborCompositeCodec, CompositeData, Encoder, NativeMap, NativeValue, ObjectBuilder,
    DEFAULT_SENTINEL,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;

#[test]
fn scalar_encode_matrix() {
    let cases: Vec<(NativeValue, Value)> = vec![
        (NativeValue::Null, Value::Null),
        (NativeValue::Bool(true), json!(true)),
        (NativeValue::Int8(-5), json!(-5)),
        (NativeValue::Int16(-300), json!(-300)),
        (NativeValue::Int32(i32::MAX), json!(i32::MAX)),
        (NativeValue::Int64(i64::MIN), json!(i64::MIN)),
        (NativeValue::Float64(2.25), json!(2.25)),
        (NativeValue::from("text"), json!("text")),
        (NativeValue::Interned(Arc::from("queue.orders")), json!("queue.orders")),
        (NativeValue::Chars(vec!['o', 'k']), json!("ok")),
        (NativeValue::Other("10.0.0.1:61616".into()), json!("10.0.0.1:61616")),
        (NativeValue::Bytes(vec![0, 200, 127]), json!([0, -56, 127])),
        (NativeValue::Json(json!({"raw": [1]})), json!({"raw": [1]})),
    ];
    for (input, expected) in cases {
        assert_eq!(encode_value(&input), expected, "{input:?}");
    }
}

#[test]
fn nested_arrays_and_maps() {
    let mut inner = NativeMap::new();
    inner.insert("depth".into(), NativeValue::Int32(2));
    inner.insert("tags".into(), NativeValue::Array(vec!["a".into(), NativeValue::Null]));
    let mut outer = NativeMap::new();
    outer.insert("name".into(), "root".into());
    outer.insert("child".into(), NativeValue::Map(inner));

    let encoded = encode_map(Some(&outer));
    assert_eq!(
        Value::Object(encoded),
        json!({"name": "root", "child": {"depth": 2, "tags": ["a", null]}})
    );
}

#[test]
fn map_keeps_insertion_order() {
    let map: NativeMap = [("z", 1), ("a", 2), ("m", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), NativeValue::Int32(v)))
        .collect();
    let keys: Vec<String> = encode_map(Some(&map)).keys().cloned().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn absent_map_is_empty_object() {
    assert!(encode_map(None).is_empty());
    assert!(to_json_object(None).is_empty());
}

#[test]
fn encode_into_builders() {
    let mut obj = ObjectBuilder::new();
    encode_into_object("n", &NativeValue::Int16(4), &mut obj);
    encode_into_object("s", &NativeValue::from("x"), &mut obj);
    assert_eq!(obj.build_value(), json!({"n": 4, "s": "x"}));

    let mut arr = ArrayBuilder::new();
    encode_into_array(&NativeValue::Bool(false), &mut arr);
    encode_into_array(&NativeValue::Null, &mut arr);
    assert_eq!(arr.build_value(), json!([false, null]));
}

#[test]
fn composite_uses_sentinel_object() {
    let mut items = Map::new();
    items.insert("count".into(), json!(3));
    let value = NativeValue::Composite(vec![CompositeData::new("java.util.Stats", items)]);

    let encoded = encode_array(std::slice::from_ref(&value));
    let wrapper = encoded[0].as_object().unwrap();
    assert_eq!(wrapper.len(), 1);
    let blobs = wrapper[DEFAULT_SENTINEL].as_array().unwrap();
    assert_eq!(blobs.len(), 1);
    assert!(blobs[0].is_string());
}

#[test]
fn custom_sentinel() {
    let codec = CborCompositeCodec;
    let encoder = Encoder::new(&codec, "composite");
    let value = NativeValue::Composite(vec![CompositeData::new("java.lang.X", Map::new())]);
    let encoded = encoder.encode_value(&value);
    assert!(encoded.get("composite").is_some_and(Value::is_array));
    assert!(encoded.get(DEFAULT_SENTINEL).is_none());
}
