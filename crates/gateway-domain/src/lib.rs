mod comms_request;
mod envelope;
mod error;
mod producer;
mod service;
mod validate;

pub use comms_request::*;
pub use envelope::*;
pub use error::*;
pub use producer::*;
pub use service::*;
pub use validate::*;

// Re-export mocks when the testing feature is enabled
#[cfg(any(test, feature = "testing"))]
pub use producer::MockCommsEventProducer;
