use std::fmt;

/// Visible state of a client session.
///
/// `Idle -> Requesting -> {Error, Streaming}`, `Streaming -> {Playable, Error}`.
/// `Playable` and `Error` go back to `Idle` when the next request starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Requesting,
    Streaming,
    Playable,
    Error(String),
}

impl UiState {
    /// True while a request is in flight. Submissions are disabled.
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Requesting | UiState::Streaming)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiState::Idle => f.write_str("idle"),
            UiState::Requesting => f.write_str("requesting"),
            UiState::Streaming => f.write_str("streaming"),
            UiState::Playable => f.write_str("playable"),
            UiState::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}
