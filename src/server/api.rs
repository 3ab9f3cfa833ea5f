//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::core::client::TranslationClient;
use crate::core::config::TranslatorConfig;
use crate::core::errors::TranslationError;
use crate::core::models::TranslationRequest;

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Arc<TranslationClient>,
}

impl AppState {
    /// Build state around an existing client
    pub fn new(translator: TranslationClient) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Message surfaced to the caller
    pub error: String,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Reject non-POST methods on the translate route
async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}

/// Translation handler
///
/// Checks run in order: credential, then body shape; the provider is
/// called only once both pass, and exactly once per request.
async fn translate(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> Result<Json<Vec<Value>>, (StatusCode, Json<ErrorResponse>)> {
    if !state.translator.config().has_api_key() {
        return Err(error_response(&TranslationError::MissingApiKey));
    }

    // An unparseable or missing body counts as missing text, so this
    // handler owns every error shape it emits.
    let request = payload
        .and_then(|Json(body)| serde_json::from_value::<TranslationRequest>(body).ok())
        .filter(|request| !request.text.is_empty());

    let request = match request {
        Some(request) => request,
        None => return Err(error_response(&TranslationError::InvalidInput)),
    };

    match state.translator.translate(&request).await {
        Ok(segments) => Ok(Json(segments)),
        Err(e) => {
            warn!("Translation failed: {}", e);
            Err(error_response(&e))
        }
    }
}

/// Map an error to its terminal HTTP response
///
/// Transport failures collapse to a generic message; their detail stays in
/// the logs.
fn error_response(err: &TranslationError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match err {
        TranslationError::InvalidInput => (StatusCode::BAD_REQUEST, err.to_string()),
        TranslationError::MissingApiKey
        | TranslationError::EmptyResponse
        | TranslationError::ParseFailed => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        TranslationError::ApiError { message, .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
        }
        TranslationError::NetworkError { .. }
        | TranslationError::HttpError(_)
        | TranslationError::InternalError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };

    (status, Json(ErrorResponse { error: message }))
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route(
            "/api/translate",
            post(translate).fallback(method_not_allowed),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16) -> anyhow::Result<()> {
    let config = TranslatorConfig::from_env()?;
    let translator = TranslationClient::new(config)?;

    let app = create_router(AppState::new(translator));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_maps_to_400() {
        let (status, body) = error_response(&TranslationError::InvalidInput);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "Missing or invalid text");
    }

    #[test]
    fn test_configuration_error_maps_to_500() {
        let (status, body) = error_response(&TranslationError::MissingApiKey);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "OpenAI API key not configured");
    }

    #[test]
    fn test_provider_message_is_surfaced() {
        let err = TranslationError::ApiError {
            status: 429,
            message: "Rate limit reached".to_string(),
        };
        let (status, body) = error_response(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "Rate limit reached");
    }

    #[test]
    fn test_transport_errors_stay_generic() {
        let err = TranslationError::NetworkError {
            message: "connection refused (10.0.0.3:443)".to_string(),
        };
        let (status, body) = error_response(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "Internal server error");
    }
}
