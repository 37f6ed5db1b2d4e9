//! HTTP API for the messaging gateway.
//!
//! Accepts comms requests, hands them to the domain pipeline and maps the
//! outcome to the gateway's response contract:
//!
//! - `POST /v1/comms-request` (and `/api/v1/comms-request`) — 202 on accept
//! - 400 with the violated constraint for invalid payloads
//! - 500 with a fixed body for any processing failure
//! - `GET /health` — liveness

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
