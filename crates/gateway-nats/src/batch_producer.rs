use crate::fifo::event_headers;
use crate::traits::JetStreamPublisher;
use async_trait::async_trait;
use gateway_domain::{CommsEvent, CommsEventProducer, DomainError, DomainResult};
use std::sync::Arc;
use tracing::{error, info};

/// Batch-send strategy: submits all envelopes of a request as one logical
/// batch. JetStream has no server-side batch publish, so the batch is driven
/// client-side: every entry is attempted, failed entries are counted, and
/// any failure surfaces as a single aggregate error naming the count.
///
/// Failed entries are not retried, and the accepted entries stay published,
/// so a partial failure means an arbitrary subset of recipients was notified.
pub struct BatchCommsEventProducer {
    jetstream: Arc<dyn JetStreamPublisher>,
    subject: String,
}

impl BatchCommsEventProducer {
    pub fn new(jetstream: Arc<dyn JetStreamPublisher>, subject: String) -> Self {
        info!(subject = %subject, "Created BatchCommsEventProducer");
        Self { jetstream, subject }
    }
}

#[async_trait]
impl CommsEventProducer for BatchCommsEventProducer {
    async fn publish_all(&self, events: &[CommsEvent]) -> DomainResult<()> {
        let mut failed = 0usize;

        for event in events {
            let payload = match serde_json::to_vec(event) {
                Ok(payload) => payload,
                Err(e) => {
                    error!(event_id = %event.id, error = %e, "Failed to serialize comms event");
                    failed += 1;
                    continue;
                }
            };
            let headers = event_headers(&self.subject, event);

            if let Err(e) = self
                .jetstream
                .publish(self.subject.clone(), headers, payload.into())
                .await
            {
                error!(event_id = %event.id, error = %e, "Failed to publish comms event");
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(DomainError::PartialBatchFailure { failed });
        }

        info!(count = events.len(), "Successfully published comms event batch");
        Ok(())
    }
}
