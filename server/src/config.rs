// Configuration for the relay server, read once at startup

use tts_core::elevenlabs::DEFAULT_BASE_URL;

/// Origin of the web frontend allowed by the CORS layer.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_base_url: String,
    pub cors_allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            elevenlabs_api_key: None,
            elevenlabs_base_url: DEFAULT_BASE_URL.to_string(),
            cors_allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let elevenlabs_api_key = std::env::var("ELEVENLABS_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let elevenlabs_base_url = std::env::var("ELEVENLABS_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.elevenlabs_base_url);

        let cors_allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.cors_allowed_origin);

        Self {
            port,
            elevenlabs_api_key,
            elevenlabs_base_url,
            cors_allowed_origin,
        }
    }
}

// Manual Debug so the API key never ends up in logs
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field(
                "elevenlabs_api_key",
                &self.elevenlabs_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("elevenlabs_base_url", &self.elevenlabs_base_url)
            .field("cors_allowed_origin", &self.cors_allowed_origin)
            .finish()
    }
}
