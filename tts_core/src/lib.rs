//! Provider side of the TTS relay.
//!
//! The relay never synthesizes audio itself. It hands the text to a
//! [`SpeechProvider`] and forwards whatever byte chunks come back. This crate
//! holds that contract, the fixed synthesis parameters, and the ElevenLabs
//! streaming client used in production.
pub mod elevenlabs;
pub mod error;
pub mod params;
pub mod stream;

use async_trait::async_trait;

pub use elevenlabs::ElevenLabsClient;
pub use error::ProviderError;
pub use params::{SynthesisParams, VoiceSettings, DEFAULT_VOICE_ID};
pub use stream::AudioStream;

/// Maximum number of characters accepted for one synthesis request.
pub const MAX_TEXT_CHARS: usize = 1000;

/// A validated synthesis request. Lives for one HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
}

impl SynthesisRequest {
    /// Build a request, falling back to [`DEFAULT_VOICE_ID`] when no voice is given.
    pub fn new(text: impl Into<String>, voice_id: Option<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
        }
    }
}

/// A streaming text-to-speech backend.
///
/// Implementations resolve once the provider has accepted the request and
/// return the audio as an ordered stream of chunks. Dropping the stream
/// abandons the upstream transfer.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    async fn stream(
        &self,
        voice_id: &str,
        text: &str,
        params: &SynthesisParams,
    ) -> Result<AudioStream, ProviderError>;
}
