use serde::{Deserialize, Serialize};

/// Structured error body returned by the JSON API, e.g.
/// `{"error": "Missing 'data' parameter"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
