use crate::comms_request::CommsRequest;
use crate::envelope::CommsEvent;
use crate::error::DomainResult;
use crate::producer::CommsEventProducer;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Domain service that turns one inbound comms request into published events
///
/// Flow:
/// 1. Validate the request fields
/// 2. Normalise `recipient` into an ordered list
/// 3. Build one envelope per recipient, in input order
/// 4. Hand the whole list to the configured producer strategy
///
/// Publish failures propagate unchanged; the HTTP layer translates them into
/// the generic processing-failure response.
pub struct CommsRequestService {
    producer: Arc<dyn CommsEventProducer>,
}

impl CommsRequestService {
    pub fn new(producer: Arc<dyn CommsEventProducer>) -> Self {
        Self { producer }
    }

    /// Process one comms request, returning the number of published events.
    #[instrument(skip(self, request), fields(source_system = %request.source_system))]
    pub async fn process(&self, request: CommsRequest) -> DomainResult<usize> {
        crate::validate::validate_struct(&request)?;

        let events: Vec<CommsEvent> = request
            .recipient
            .as_list()
            .into_iter()
            .map(|recipient| CommsEvent::for_recipient(&request, recipient))
            .collect();

        // Validation guarantees at least one recipient; still behave safely
        if events.is_empty() {
            debug!("no recipients after normalisation, nothing to publish");
            return Ok(0);
        }

        self.producer.publish_all(&events).await?;

        info!(count = events.len(), "successfully processed comms request");
        Ok(events.len())
    }
}
