use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    // HTTP configuration
    /// HTTP bind host
    #[serde(default = "default_http_host")]
    pub http_host: String,

    /// HTTP bind port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    // NATS configuration
    /// NATS server URL
    #[serde(default = "default_nats_url")]
    pub nats_url: String,

    /// NATS JetStream stream name for comms events
    #[serde(default = "default_comms_stream")]
    pub comms_stream: String,

    /// Subject comms events are published to; a `.fifo` suffix enables
    /// per-message dedup and group metadata
    #[serde(default = "default_comms_subject")]
    pub comms_subject: String,

    /// NATS connection timeout in seconds
    #[serde(default = "default_nats_connect_timeout_secs")]
    pub nats_connect_timeout_secs: u64,

    /// Publish strategy: sequential single-send or client-side batch
    #[serde(default = "default_publish_strategy")]
    pub publish_strategy: PublishStrategy,

    // OpenTelemetry configuration
    /// OpenTelemetry OTLP endpoint (gRPC)
    #[serde(default = "default_otel_endpoint")]
    pub otel_endpoint: String,

    /// Enable OpenTelemetry export
    #[serde(default = "default_otel_enabled")]
    pub otel_enabled: bool,

    /// Service name for the OpenTelemetry resource
    #[serde(default = "default_otel_service_name")]
    pub otel_service_name: String,
}

/// Which CommsEventProducer implementation to wire at startup.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublishStrategy {
    Sequential,
    Batch,
}

fn default_log_level() -> String {
    "info".to_string()
}

// HTTP defaults
fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    3000
}

// NATS defaults
fn default_nats_url() -> String {
    "nats://localhost:4222".to_string()
}

fn default_comms_stream() -> String {
    "comms_events".to_string()
}

fn default_comms_subject() -> String {
    "comms.request".to_string()
}

fn default_nats_connect_timeout_secs() -> u64 {
    10
}

fn default_publish_strategy() -> PublishStrategy {
    PublishStrategy::Sequential
}

// OpenTelemetry defaults
fn default_otel_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_otel_enabled() -> bool {
    false
}

fn default_otel_service_name() -> String {
    "messaging-gateway".to_string()
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("GATEWAY"))
            .build()?
            .try_deserialize()
    }
}
