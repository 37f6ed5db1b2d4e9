use gateway_domain::CommsRequestService;
use std::sync::Arc;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub comms: Arc<CommsRequestService>,
}

impl AppState {
    pub fn new(comms: Arc<CommsRequestService>) -> Self {
        Self { comms }
    }
}
