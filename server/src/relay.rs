//! Forwarding provider audio to the HTTP caller.
//!
//! Headers are fixed before the first chunk is pulled. Each provider chunk
//! is handed to the transport as-is, in arrival order, and the next one is
//! only requested once the transport polls for it. A provider error after
//! that point can no longer become a JSON error: the body stream yields the
//! error, hyper aborts the connection, and the caller sees a truncated body.
use axum::{
    body::Body,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tracing::{error, info};
use tts_core::{AudioStream, ProviderError};

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Build the 200 response that streams `audio` to the caller.
pub fn audio_response(audio: AudioStream) -> Response {
    info!("Streaming audio to client...");
    let body = Body::from_stream(forward(audio));
    ([(header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)], body).into_response()
}

fn forward(mut audio: AudioStream) -> impl Stream<Item = Result<Bytes, ProviderError>> + Send {
    async_stream::stream! {
        let mut chunks = 0usize;
        let mut bytes = 0usize;
        let mut failed = false;

        while let Some(item) = audio.next().await {
            match item {
                Ok(chunk) => {
                    chunks += 1;
                    bytes += chunk.len();
                    yield Ok(chunk);
                }
                Err(e) => {
                    error!(
                        error = %e,
                        chunks,
                        bytes,
                        "Provider stream failed after headers were sent"
                    );
                    failed = true;
                    yield Err(e);
                    break;
                }
            }
        }

        if !failed {
            info!(chunks, bytes, "Streaming finished.");
        }
    }
}
