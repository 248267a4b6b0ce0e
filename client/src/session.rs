use futures_util::StreamExt;
use reqwest::{header, Client};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::buffer::{AudioBlob, PlaybackBuffer};
use crate::error::{message_from_body, ClientError};
use crate::player::AudioPlayer;
use crate::state::UiState;

const STATE_CHANNEL_CAPACITY: usize = 32;

#[derive(Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
}

/// One client session: a text submission loop bound to a single player.
///
/// `request_and_play` takes `&mut self`, so a session can never have two
/// requests in flight. A new request first stops and clears whatever the
/// player currently holds.
pub struct TtsSession<P> {
    http: Client,
    endpoint: String,
    player: P,
    state: UiState,
    events: broadcast::Sender<UiState>,
}

impl<P: AudioPlayer> TtsSession<P> {
    /// `server_url` is the relay's base URL, e.g. `http://localhost:8081`.
    pub fn new(server_url: &str, player: P) -> Self {
        Self::with_client(Client::new(), server_url, player)
    }

    pub fn with_client(http: Client, server_url: &str, player: P) -> Self {
        let (events, _) = broadcast::channel(STATE_CHANNEL_CAPACITY);
        Self {
            http,
            endpoint: format!("{}/api/tts", server_url.trim_end_matches('/')),
            player,
            state: UiState::Idle,
            events,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Receive every state transition from now on, in order.
    pub fn subscribe(&self) -> broadcast::Receiver<UiState> {
        self.events.subscribe()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Send `text` to the relay, collect the audio and start playback.
    ///
    /// Failures end in [`UiState::Error`] and are also returned. A failure
    /// to start playback is only logged; the audio is still loaded.
    pub async fn request_and_play(&mut self, text: &str) -> Result<(), ClientError> {
        if self.state != UiState::Idle {
            self.transition(UiState::Idle);
        }

        if self.player.has_source() {
            self.player.stop();
            self.player.clear_source();
        }

        self.transition(UiState::Requesting);

        let result = match self.fetch_audio(text).await {
            Ok(blob) => self.player.load(blob).map_err(ClientError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                if let Err(e) = self.player.play() {
                    error!("Audio play failed: {e}");
                }
                self.transition(UiState::Playable);
                Ok(())
            }
            Err(e) => {
                error!("{e}");
                self.transition(UiState::Error(e.user_message()));
                Err(e)
            }
        }
    }

    async fn fetch_audio(&mut self, text: &str) -> Result<AudioBlob, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&TtsRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: message_from_body(&body),
            });
        }

        self.transition(UiState::Streaming);

        let mut buffer = PlaybackBuffer::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            debug!(len = chunk.len(), "received audio chunk");
            buffer.push(chunk);
        }

        if buffer.is_empty() {
            return Err(ClientError::EmptyStream);
        }
        info!(
            chunks = buffer.chunk_count(),
            bytes = buffer.byte_len(),
            "audio stream complete"
        );
        Ok(buffer.into_blob())
    }

    fn transition(&mut self, next: UiState) {
        debug!(from = %self.state, to = %next, "state transition");
        self.state = next.clone();
        // No subscribers is fine
        let _ = self.events.send(next);
    }
}
