//! Common utilities for integration tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use bytes::Bytes;
use futures_util::stream;
use server::config::ServerConfig;
use server::{build_router, AppState};
use tts_core::{AudioStream, ProviderError, SpeechProvider, SynthesisParams};

/// What the fake provider does when called.
#[derive(Clone)]
pub enum Script {
    /// Stream these chunks, then finish.
    Chunks(Vec<Bytes>),
    /// Fail before any audio is produced.
    FailBeforeStream,
    /// Stream these chunks, then fail.
    FailMidStream(Vec<Bytes>),
    /// Stream `n` chunks tagged with the voice id, yielding to the runtime
    /// between chunks so concurrent requests interleave on the executor.
    TaggedByVoice(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub voice_id: String,
    pub text: String,
    pub params: SynthesisParams,
}

pub struct FakeProvider {
    script: Script,
    calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechProvider for FakeProvider {
    async fn stream(
        &self,
        voice_id: &str,
        text: &str,
        params: &SynthesisParams,
    ) -> Result<AudioStream, ProviderError> {
        self.calls.lock().unwrap().push(Call {
            voice_id: voice_id.to_string(),
            text: text.to_string(),
            params: params.clone(),
        });

        match &self.script {
            Script::Chunks(chunks) => Ok(tts_core::stream::from_chunks(chunks.clone())),
            Script::FailBeforeStream => Err(ProviderError::Status {
                status: 401,
                body: "invalid api key".into(),
            }),
            Script::FailMidStream(chunks) => Ok(tts_core::stream::failing_after(
                chunks.clone(),
                ProviderError::Stream("connection reset".into()),
            )),
            Script::TaggedByVoice(n) => {
                let voice = voice_id.to_string();
                let n = *n;
                let s = stream::unfold(0usize, move |i| {
                    let voice = voice.clone();
                    async move {
                        if i == n {
                            return None;
                        }
                        tokio::task::yield_now().await;
                        let chunk = Bytes::from(format!("{voice}:{i};"));
                        Some((Ok::<_, ProviderError>(chunk), i + 1))
                    }
                });
                Ok(Box::pin(s))
            }
        }
    }
}

/// Create a test app instance backed by `provider`
pub fn create_test_app(provider: Arc<FakeProvider>) -> Router {
    let state = AppState::new(provider);
    build_router(state, &ServerConfig::default()).expect("default config builds a router")
}
