use crate::fifo::event_headers;
use crate::traits::JetStreamPublisher;
use anyhow::Context;
use async_trait::async_trait;
use gateway_domain::{CommsEvent, CommsEventProducer, DomainError, DomainResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Single-send strategy: publishes each envelope individually, in recipient
/// order, awaiting every acknowledgment before moving on.
///
/// Stops at the first failed publish and propagates it, so a failed request
/// may have notified a prefix of its recipients. The caller surfaces the
/// whole request as failed either way.
pub struct SequentialCommsEventProducer {
    jetstream: Arc<dyn JetStreamPublisher>,
    subject: String,
}

impl SequentialCommsEventProducer {
    pub fn new(jetstream: Arc<dyn JetStreamPublisher>, subject: String) -> Self {
        info!(subject = %subject, "Created SequentialCommsEventProducer");
        Self { jetstream, subject }
    }
}

#[async_trait]
impl CommsEventProducer for SequentialCommsEventProducer {
    async fn publish_all(&self, events: &[CommsEvent]) -> DomainResult<()> {
        for event in events {
            let payload = serde_json::to_vec(event)
                .context("Failed to serialize comms event")
                .map_err(DomainError::PublishError)?;
            let headers = event_headers(&self.subject, event);

            debug!(
                subject = %self.subject,
                event_id = %event.id,
                size_bytes = payload.len(),
                "Publishing comms event"
            );

            self.jetstream
                .publish(self.subject.clone(), headers, payload.into())
                .await
                .context("Failed to publish and acknowledge comms event")
                .map_err(DomainError::PublishError)?;

            info!(event_id = %event.id, "Successfully published comms event");
        }

        Ok(())
    }
}
