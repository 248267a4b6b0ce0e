//! Streaming text-to-speech relay.
//!
//! `POST /api/tts` validates the request, asks the configured
//! [`SpeechProvider`] for audio and streams the bytes back as `audio/mpeg`.
pub mod config;
pub mod error;
pub mod relay;
pub mod validation;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tts_core::{SpeechProvider, SynthesisParams};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::validation::{validate_tts_request, ValidationErrors};

/// Process-wide state shared by all requests. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn SpeechProvider>,
    pub params: Arc<SynthesisParams>,
}

impl AppState {
    pub fn new(provider: Arc<dyn SpeechProvider>) -> Self {
        Self {
            provider,
            params: Arc::new(SynthesisParams::default()),
        }
    }
}

/// Build the application router with its middleware stack.
pub fn build_router(state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let cors = cors_layer(&config.cors_allowed_origin)?;

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .into_inner();

    let api = Router::new()
        .route("/health", get(health_check))
        .route("/tts", post(tts_endpoint));

    Ok(Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(axum::middleware::from_fn(add_request_id))
        .layer(middleware_stack)
        .with_state(state))
}

/// CORS policy admitting exactly one browser origin.
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid CORS origin {origin:?}: {e}"))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(false))
}

// Request ID middleware for tracing
async fn add_request_id(mut request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let value = HeaderValue::from_str(&request_id).ok();
    if let Some(v) = &value {
        request.headers_mut().insert("x-request-id", v.clone());
    }
    let mut response = next.run(request).await;
    if let Some(v) = value {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn tts_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|rejection| ValidationErrors::form(rejection.body_text()))?;
    let req = validate_tts_request(&body)?;

    info!(
        voice_id = %req.voice_id,
        "Received request for TTS with voice {}: {:?}",
        req.voice_id,
        req.text
    );

    let audio = state
        .provider
        .stream(&req.voice_id, &req.text, &state.params)
        .await?;

    Ok(relay::audio_response(audio))
}
