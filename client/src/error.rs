use serde::Deserialize;
use thiserror::Error;

/// Shown when the server's error body carries no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to get audio stream.";

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no audio loaded")]
    NoSource,

    #[error("player I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, or the body stream broke while reading.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("audio stream ended without any data")]
    EmptyStream,

    #[error(transparent)]
    Player(#[from] PlayerError),
}

impl ClientError {
    /// Text for the visible error state.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// `error` field of a relay error body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Validation failures: `{"message": ..., "fieldErrors": ...}`
    Structured { message: Option<String> },
    /// Provider failures: a bare string
    Plain(String),
}

/// JSON body of a non-success relay response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorPayload {
    pub error: Option<ErrorDetail>,
}

impl ErrorPayload {
    /// Parse a response body. Anything that is not a recognizable error
    /// payload yields `None`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    pub fn message(&self) -> &str {
        match &self.error {
            Some(ErrorDetail::Structured { message: Some(m) }) if !m.is_empty() => m.as_str(),
            Some(ErrorDetail::Plain(m)) if !m.is_empty() => m.as_str(),
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}

/// Message to show for a non-success response body.
pub fn message_from_body(body: &[u8]) -> String {
    ErrorPayload::parse(body)
        .map(|p| p.message().to_string())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
