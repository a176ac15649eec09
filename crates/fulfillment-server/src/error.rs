use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dialogflow_fulfillment::WebhookError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid server address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// A webhook failure turned into an HTTP response
#[derive(Debug)]
pub struct ApiError(WebhookError);

impl From<WebhookError> for ApiError {
    fn from(err: WebhookError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            WebhookError::InvalidRequest(_) | WebhookError::InvalidContext(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = %status, "Webhook request failed: {}", self.0);

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
