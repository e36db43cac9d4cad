//! Error bodies returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body of a failed backend request: `{"detail": ...}`.
///
/// `detail` is usually a string, but request-validation failures carry a
/// list of objects, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorResponse {
    /// Human-readable summary of `detail`, if there is one.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}
