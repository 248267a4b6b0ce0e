use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Url};
use serde::Serialize;
use tracing::debug;

use crate::{AudioStream, ProviderError, SpeechProvider, SynthesisParams, VoiceSettings};

/// Public ElevenLabs API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

const XI_API_KEY_HEADER: &str = "xi-api-key";

/// Body of the ElevenLabs streaming text-to-speech call
#[derive(Serialize)]
struct StreamRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

/// Streaming client for the ElevenLabs text-to-speech API.
///
/// Built once at startup and shared by every request.
#[derive(Clone)]
pub struct ElevenLabsClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The voice id always lands in a single percent-encoded path segment,
    /// so it cannot add query parameters or leave the text-to-speech route.
    fn stream_url(&self, voice_id: &str) -> Result<Url, ProviderError> {
        if matches!(voice_id, "" | "." | "..") {
            return Err(ProviderError::InvalidVoiceId(voice_id.to_string()));
        }
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v1", "text-to-speech", voice_id, "stream"]);
        Ok(url)
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsClient {
    async fn stream(
        &self,
        voice_id: &str,
        text: &str,
        params: &SynthesisParams,
    ) -> Result<AudioStream, ProviderError> {
        let body = StreamRequest {
            text,
            model_id: &params.model_id,
            voice_settings: &params.voice_settings,
        };

        let mut builder = self
            .client
            .post(self.stream_url(voice_id)?)
            .query(&[("output_format", params.output_format.as_str())])
            .header(header::ACCEPT, "audio/mpeg")
            .json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.header(XI_API_KEY_HEADER, key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }
        debug!(%status, voice_id, "provider accepted synthesis request");

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(ProviderError::Http));
        Ok(Box::pin(stream))
    }
}
