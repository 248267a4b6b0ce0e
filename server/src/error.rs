use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tts_core::ProviderError;

use crate::validation::ValidationErrors;

/// Message returned to callers when the provider fails. Details stay in the logs.
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to generate audio stream.";

/// API Error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0:?}")]
    Validation(ValidationErrors),

    #[error("TTS provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    message: &'a str,
    #[serde(flatten)]
    detail: &'a ValidationErrors,
}

#[derive(Serialize)]
struct ErrorResponse<T: Serialize> {
    error: T,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let body = ErrorResponse {
                    error: ValidationBody {
                        message: errors.first_message().unwrap_or("Invalid request"),
                        detail: &errors,
                    },
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Provider(e) => {
                tracing::error!(error = %e, "Error in TTS endpoint");
                let body = ErrorResponse {
                    error: PROVIDER_FAILURE_MESSAGE,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn provider_detail_is_not_leaked() {
        let err = ApiError::Provider(ProviderError::Status {
            status: 401,
            body: "secret-detail".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], PROVIDER_FAILURE_MESSAGE);
        assert!(!String::from_utf8_lossy(&body).contains("secret-detail"));
    }

    #[tokio::test]
    async fn validation_error_carries_message_and_fields() {
        let err = ApiError::from(ValidationErrors::form("Expected object, received array"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "Expected object, received array");
        assert_eq!(json["error"]["formErrors"][0], "Expected object, received array");
        assert!(json["error"]["fieldErrors"].is_object());
    }
}
