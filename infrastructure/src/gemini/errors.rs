//! Error-body interpretation for non-success provider responses

use serde_json::Value;

/// Message used when the provider sends an empty error body.
pub const FALLBACK_ERROR_MESSAGE: &str = "Provider request failed";

/// Best human-readable message from an error body.
///
/// Prefers `error.message`, then `error.status`, then the raw body text.
pub fn error_message(body: &str) -> String {
    structured_message(body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            body.to_string()
        }
    })
}

fn structured_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?.as_object()?;

    ["message", "status"]
        .iter()
        .filter_map(|key| error.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
