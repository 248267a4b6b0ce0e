use serde::{Deserialize, Serialize};

/// Voice used when the caller does not pick one.
pub const DEFAULT_VOICE_ID: &str = "JBFqnCBsd6RMkjVDRZzb";

const MODEL_ID: &str = "eleven_multilingual_v2";
const OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Voice rendering settings sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            use_speaker_boost: true,
        }
    }
}

/// Fixed synthesis policy. Not exposed to callers of the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisParams {
    pub model_id: String,
    pub output_format: String,
    pub voice_settings: VoiceSettings,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            model_id: MODEL_ID.to_string(),
            output_format: OUTPUT_FORMAT.to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }
}
