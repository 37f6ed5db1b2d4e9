use anyhow::Result;
use async_nats::HeaderMap;
use async_trait::async_trait;
use bytes::Bytes;

/// Trait for JetStream publish operations
/// Abstracts the single operation the producer strategies need, so they can
/// be tested without a broker. The concrete client awaits the JetStream
/// acknowledgment before returning.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait JetStreamPublisher: Send + Sync {
    /// Publish a message with headers to a subject and await acknowledgment
    async fn publish(&self, subject: String, headers: HeaderMap, payload: Bytes) -> Result<()>;
}
