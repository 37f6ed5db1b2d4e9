mod batch_producer;
mod client;
mod fifo;
mod sequential_producer;
mod traits;

pub use batch_producer::*;
pub use client::*;
pub use fifo::*;
pub use sequential_producer::*;
pub use traits::*;

// Re-export mocks when the testing feature is enabled
#[cfg(any(test, feature = "testing"))]
pub use traits::MockJetStreamPublisher;
