//! HTTP routes
//!
//! The comms-request handler delegates everything past body extraction to
//! the domain pipeline; response mapping lives in [`crate::error`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use gateway_domain::CommsRequest;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Static body returned once a request has been accepted for publishing.
pub const ACCEPTED_MESSAGE: &str = "Communication request accepted";

#[derive(Debug, Serialize)]
struct AcceptedResponse {
    message: &'static str,
}

/// Build the complete gateway router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/comms-request", post(create_comms_request))
        // Versioned alias used by callers routing through the shared ingress
        .route("/api/v1/comms-request", post(create_comms_request))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "message": "success" }))
}

/// Accept a comms request, fan it out per recipient and publish each envelope.
async fn create_comms_request(
    State(state): State<AppState>,
    payload: Result<Json<CommsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AcceptedResponse>), ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    state.comms.process(request).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            message: ACCEPTED_MESSAGE,
        }),
    ))
}
