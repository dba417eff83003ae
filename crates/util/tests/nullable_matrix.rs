use json_bridge_util::{JsonType, NullableJsonString};
use serde_json::Value;
use std::sync::Arc;
use std::thread;

#[test]
fn nullable_type_matrix() {
    let cases: [(Option<&str>, JsonType, Option<&str>); 4] = [
        (None, JsonType::Null, None),
        (Some(""), JsonType::Null, None),
        (Some("x"), JsonType::String, Some("\"x\"")),
        (Some("tab\tquote\""), JsonType::String, Some("\"tab\\tquote\\\"\"")),
    ];
    for (input, ty, text) in cases {
        let s = NullableJsonString::new(input);
        assert_eq!(s.value_type(), ty, "input={input:?}");
        assert_eq!(s.to_text(), text, "input={input:?}");
    }
}

#[test]
fn nullable_text_round_trips_through_serde_json() {
    let s = NullableJsonString::from("multi\nline \u{1} \"quoted\"");
    let parsed: Value = serde_json::from_str(s.to_text().unwrap()).unwrap();
    assert_eq!(parsed, Value::from(s));
}

#[test]
fn nullable_text_is_shared_across_threads() {
    let s = Arc::new(NullableJsonString::from("shared"));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let s = Arc::clone(&s);
            thread::spawn(move || s.to_text().map(str::to_owned))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("\"shared\""));
    }
}
