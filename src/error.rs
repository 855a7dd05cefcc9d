//! Client Errors
//!
//! Failure taxonomy for calls against the lead API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed (network, CORS, aborted fetch)
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// Server answered `success: false`
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// Form did not pass client-side checks; nothing was sent
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn rejected(error: Option<String>, message: Option<String>) -> Self {
        ApiError::Rejected(error.or(message).unwrap_or_else(|| "unknown error".to_string()))
    }

    /// Text shown in an error toast, prefixed by the action that failed
    pub fn toast_text(&self, action: &str) -> String {
        match self {
            ApiError::Validation(msg) => format!("❌ {}", msg),
            _ => format!("❌ Error {}", action),
        }
    }
}
