//! Embedded JSON columns.
//!
//! Several resource tables keep structured data (`variables`, `flow_data`,
//! `flow_data_override`) in text columns. They are decoded once when a row
//! leaves the store.

use serde_json::Value;

/// Decode an embedded JSON text column.
///
/// - `NULL` or blank text decodes to `None`.
/// - Valid JSON decodes to the parsed value.
/// - Anything else is kept verbatim as a JSON string.
pub fn decode_embedded(text: Option<&str>) -> Option<Value> {
    let raw = text?;
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(raw.to_string())),
    }
}
