// src/models/tutor.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/tutor/converse`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IncomingMessage {
    /// Missing and `null` both land here as `None`
    #[serde(default)]
    pub message: Option<String>,
}

impl IncomingMessage {
    /// The untrimmed message, if it has any non-whitespace content.
    pub fn usable_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }
}
