//! Text-in, text-out helpers behind the `json-merge` and `json-nest` binaries.

use serde_json::Value;

use crate::error::JsonBridgeError;
use crate::merge::{merge_with, MergeOptions};
use crate::path::build_at_path;
use crate::read::read_json_object;

// ── json-merge ────────────────────────────────────────────────────────────

/// Merge `update_json` over `base_json`.
///
/// Both documents must be JSON objects. Returns the merged document as a
/// pretty-printed JSON string.
pub fn merge_documents(
    base_json: &str,
    update_json: &str,
    options: &MergeOptions,
) -> Result<String, JsonBridgeError> {
    let base = read_json_object(base_json)?;
    let update = read_json_object(update_json)?;
    let merged = merge_with(&base, &update, options);
    Ok(serde_json::to_string_pretty(&Value::Object(merged))?)
}

// ── json-nest ─────────────────────────────────────────────────────────────

/// Nest the document `value_json` under the slash-delimited `path`.
pub fn nest_document(path: &str, value_json: &str) -> Result<String, JsonBridgeError> {
    let value: Value = serde_json::from_str(value_json)?;
    let nested = build_at_path(path, value)?;
    Ok(serde_json::to_string_pretty(&nested.build_value())?)
}
