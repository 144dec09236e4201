use serde::{Deserialize, Serialize};

/// Тело ответа API при ошибке
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Parse an error body and return its non-blank `message`.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.message)
            .filter(|m| !m.trim().is_empty())
    }
}
