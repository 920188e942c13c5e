//! Decoders for JSON blobs stored in editor state rows.
//!
//! Stored values are opaque strings. Only two shapes are ever interpreted
//! (chat data and composer data); a value that does not decode degrades to a
//! zero count instead of failing the caller.

use serde_json::Value;

/// A stored value after an attempt to decode it as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Json(Value),
    Raw(String),
}

impl DecodedValue {
    /// JSON view of the value; undecodable text becomes a JSON string.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(v) => v,
            Self::Raw(s) => Value::String(s),
        }
    }
}

#[must_use]
pub fn decode_stored_value(raw: &str) -> DecodedValue {
    serde_json::from_str(raw).map_or_else(|_| DecodedValue::Raw(raw.to_owned()), DecodedValue::Json)
}

/// Length of the array stored under `field` of a top-level JSON object.
/// Anything else (bad JSON, not an object, field missing or not an array) is 0.
fn object_array_len(raw: &str, field: &str, shape: &'static str) -> usize {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(shape, error = %e, "stored value did not decode, counting as empty");
            return 0;
        },
    };
    value.as_object().and_then(|obj| obj.get(field)).and_then(Value::as_array).map_or(0, Vec::len)
}

/// Number of chat tabs in a chat-data value (0 when malformed).
#[must_use]
pub fn chat_tab_count(raw: &str) -> usize {
    object_array_len(raw, "tabs", "chat data")
}

/// Number of composers in a composer-data value (0 when malformed).
#[must_use]
pub fn composer_count(raw: &str) -> usize {
    object_array_len(raw, "allComposers", "composer data")
}
