use crate::envelope::CommsEvent;
use crate::error::DomainResult;
use async_trait::async_trait;

/// Trait for delivering the envelopes of one request to the message broker
///
/// Implementations are the two publish strategies: sequential single-send
/// and client-side batch-send. Both take the full ordered envelope list so
/// the pipeline stays strategy-agnostic.
///
/// Implementations should:
/// - Serialize each envelope to JSON
/// - Publish to the configured subject, with FIFO metadata where required
/// - Return an error if any envelope could not be published
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommsEventProducer: Send + Sync {
    /// Publish every envelope of one request, preserving input order.
    async fn publish_all(&self, events: &[CommsEvent]) -> DomainResult<()>;
}
