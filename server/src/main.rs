use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{info, warn};
use tts_core::ElevenLabsClient;

use server::config::ServerConfig;
use server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _ = dotenv::dotenv();

    async_main().await
}

async fn async_main() -> anyhow::Result<()> {
    info!("Starting TTS relay server...");

    let config = ServerConfig::from_env();
    info!(?config, "Server configuration loaded");

    if config.elevenlabs_api_key.is_none() {
        warn!("ELEVENLABS_API_KEY not set, provider calls will be rejected upstream");
    }

    // One provider client for the lifetime of the process
    let provider = ElevenLabsClient::new(
        config.elevenlabs_api_key.clone(),
        config.elevenlabs_base_url.clone(),
    );
    let state = AppState::new(Arc::new(provider));

    info!("CORS configured for origin {}", config.cors_allowed_origin);
    let app = build_router(state, &config)?;

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!("Failed to bind {addr}: {e}. Try a different PORT.")
    })?;

    info!("Backend server is running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
