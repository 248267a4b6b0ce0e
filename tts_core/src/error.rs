use thiserror::Error;

/// Failures talking to the speech provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid provider URL: {0}")]
    InvalidUrl(String),

    #[error("invalid voice id: {0:?}")]
    InvalidVoiceId(String),

    #[error("provider stream failed: {0}")]
    Stream(String),
}
