use json_bridge::cli::{merge_documents, nest_document};
use json_bridge::{JsonBridgeError, MergeOptions};
use serde_json::{json, Value};

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn merge_documents_output_is_pretty() {
    let out = merge_documents(r#"{"a":1}"#, r#"{"b":2}"#, &MergeOptions::default()).unwrap();
    assert!(out.contains('\n'));
    assert_eq!(parse(&out), json!({"a": 1, "b": 2}));
}

#[test]
fn merge_documents_reports_parse_errors() {
    let err = merge_documents("{", "{}", &MergeOptions::default()).unwrap_err();
    assert!(matches!(err, JsonBridgeError::Parse(_)));
    assert!(err.to_string().starts_with("invalid JSON"));
}

#[test]
fn nest_document_wraps_any_value() {
    assert_eq!(parse(&nest_document("x", "null").unwrap()), json!({"x": null}));
    assert_eq!(parse(&nest_document("x/y", "[1,2]").unwrap()), json!({"x": {"y": [1, 2]}}));
}
