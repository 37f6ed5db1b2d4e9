//! API error types
//!
//! Maps domain outcomes to the gateway's fixed response bodies. Validation
//! failures echo the violated constraint; processing failures never leak
//! internal error text to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gateway_domain::DomainError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed deserialization or schema validation
    #[error("invalid request payload: {0}")]
    Validation(String),

    /// Failure from the domain pipeline
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details)
            | ApiError::Domain(DomainError::ValidationError(details)) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "statusCode": 400,
                    "message": "Invalid request payload",
                    "details": details,
                })),
            )
                .into_response(),
            ApiError::Domain(error) => {
                // Full detail goes to the log only; callers get a fixed body
                tracing::error!(error = %error, "Failed to process comms request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "statusCode": 500,
                        "message": "Failed to process request",
                    })),
                )
                    .into_response()
            }
        }
    }
}
