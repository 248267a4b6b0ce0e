//! Client side of the TTS relay.
//!
//! A [`TtsSession`] plays the part of the browser page: it posts text to the
//! relay, reads the audio body chunk by chunk, assembles it into one blob and
//! hands that to an [`AudioPlayer`].
pub mod buffer;
pub mod cli;
pub mod error;
pub mod player;
pub mod session;
pub mod state;

pub use buffer::{AudioBlob, PlaybackBuffer};
pub use error::{ClientError, ErrorPayload, PlayerError};
pub use player::{AudioPlayer, FilePlayer};
pub use session::TtsSession;
pub use state::UiState;
