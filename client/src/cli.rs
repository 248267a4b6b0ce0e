use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_TEXT: &str = "Hello, world! This is a test of streaming audio from ElevenLabs.";

/// Send text to the TTS relay and play the streamed audio.
#[derive(Debug, Parser)]
#[command(name = "tts-client", version)]
pub struct Args {
    /// Base URL of the relay server
    #[arg(long, env = "TTS_SERVER_URL", default_value = "http://localhost:8081")]
    pub server_url: String,

    /// Where the received audio is written
    #[arg(long, short, default_value = "speech.mp3")]
    pub output: PathBuf,

    /// Command used to play the audio file, e.g. "mpv --no-video"
    #[arg(long, env = "TTS_PLAYER")]
    pub player: Option<String>,

    /// Read one submission per line from stdin instead of sending TEXT once
    #[arg(long, short)]
    pub interactive: bool,

    /// Text to speak
    #[arg(default_value = DEFAULT_TEXT)]
    pub text: String,
}
