use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Schema constraint violated by the caller. Produced before any publish
    /// attempt, so no side effects have occurred when this is returned.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A batch publish left some entries unpublished. The transport may have
    /// accepted the rest; callers must treat the whole request as failed.
    #[error("Failed to publish {failed} messages")]
    PartialBatchFailure { failed: usize },

    /// Transport-level publish failure.
    #[error("Publish error: {0}")]
    PublishError(#[from] anyhow::Error),
}
