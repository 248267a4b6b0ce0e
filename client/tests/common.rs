//! Common utilities for client tests

#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use client::{AudioBlob, AudioPlayer, PlayerError};
use futures_util::stream;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Number of chunks the mock relay streams for a successful request.
pub const CHUNKS: usize = 3;

/// Audio the mock relay returns for `text`, chunk by chunk.
pub fn chunks_for(text: &str) -> Vec<Bytes> {
    (0..CHUNKS)
        .map(|i| Bytes::from(format!("{text}-chunk{i}|")))
        .collect()
}

pub fn audio_for(text: &str) -> Bytes {
    Bytes::from(chunks_for(text).concat())
}

/// Stand-in for the relay. The text selects the behaviour.
async fn mock_tts(Json(body): Json<Value>) -> Response {
    let text = body["text"].as_str().unwrap_or_default().to_string();
    match text.as_str() {
        "" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "Text cannot be empty" } })),
        )
            .into_response(),
        "provider-down" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to generate audio stream." })),
        )
            .into_response(),
        "bad-gateway" => (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response(),
        "silence" => ([(header::CONTENT_TYPE, "audio/mpeg")], Body::empty()).into_response(),
        "truncated" => {
            let items = vec![
                Ok(Bytes::from_static(b"ID3partial")),
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "provider went away")),
            ];
            // Pause before each item so headers and the first chunk are flushed
            let s = stream::unfold(items.into_iter(), |mut rest| async move {
                let item = rest.next()?;
                tokio::time::sleep(Duration::from_millis(20)).await;
                Some((item, rest))
            });
            ([(header::CONTENT_TYPE, "audio/mpeg")], Body::from_stream(s)).into_response()
        }
        _ => {
            let s = stream::unfold(chunks_for(&text).into_iter(), |mut rest| async move {
                let chunk = rest.next()?;
                tokio::time::sleep(Duration::from_millis(10)).await;
                Some((Ok::<_, std::io::Error>(chunk), rest))
            });
            ([(header::CONTENT_TYPE, "audio/mpeg")], Body::from_stream(s)).into_response()
        }
    }
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn spawn_mock_relay() -> String {
    serve(Router::new().route("/api/tts", post(mock_tts))).await
}

/// A base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Stop,
    Clear,
    Load(Bytes),
    Play,
}

/// Player that records every call.
#[derive(Default)]
pub struct RecordingPlayer {
    pub ops: Vec<Op>,
    pub source: Option<AudioBlob>,
    pub fail_play: bool,
}

impl RecordingPlayer {
    pub fn failing_play() -> Self {
        Self {
            fail_play: true,
            ..Self::default()
        }
    }
}

impl AudioPlayer for RecordingPlayer {
    fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn stop(&mut self) {
        self.ops.push(Op::Stop);
    }

    fn clear_source(&mut self) {
        self.ops.push(Op::Clear);
        self.source = None;
    }

    fn load(&mut self, blob: AudioBlob) -> Result<(), PlayerError> {
        self.ops.push(Op::Load(blob.bytes.clone()));
        self.source = Some(blob);
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.ops.push(Op::Play);
        if self.fail_play {
            return Err(PlayerError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "autoplay blocked",
            )));
        }
        Ok(())
    }
}
