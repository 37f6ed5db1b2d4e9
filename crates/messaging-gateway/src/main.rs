mod config;
mod telemetry;

use crate::config::{PublishStrategy, ServiceConfig};
use crate::telemetry::{init_telemetry, shutdown_telemetry, TelemetryConfig, TelemetryProviders};
use gateway_api::{build_router, AppState};
use gateway_domain::{CommsEventProducer, CommsRequestService};
use gateway_nats::{BatchCommsEventProducer, NatsClient, SequentialCommsEventProducer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    // Initialize configuration and tracing
    let config = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let telemetry_providers: Option<TelemetryProviders> = match init_telemetry(&TelemetryConfig {
        service_name: config.otel_service_name.clone(),
        otel_endpoint: config.otel_endpoint.clone(),
        otel_enabled: config.otel_enabled,
        log_level: config.log_level.clone(),
    }) {
        Ok(providers) => providers,
        Err(e) => {
            eprintln!("Failed to initialize telemetry: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        subject = %config.comms_subject,
        strategy = ?config.publish_strategy,
        "Starting messaging gateway"
    );
    debug!("Configuration: {:?}", config);

    if let Err(e) = run(&config).await {
        error!("Messaging gateway terminated with error: {}", e);
        shutdown_telemetry(telemetry_providers);
        std::process::exit(1);
    }

    shutdown_telemetry(telemetry_providers);
}

async fn run(config: &ServiceConfig) -> anyhow::Result<()> {
    let nats_client = NatsClient::connect(
        &config.nats_url,
        Duration::from_secs(config.nats_connect_timeout_secs),
    )
    .await?;
    nats_client
        .ensure_stream(&config.comms_stream, vec![config.comms_subject.clone()])
        .await?;

    let publisher = nats_client.create_publisher_client();
    let producer: Arc<dyn CommsEventProducer> = match config.publish_strategy {
        PublishStrategy::Sequential => Arc::new(SequentialCommsEventProducer::new(
            publisher,
            config.comms_subject.clone(),
        )),
        PublishStrategy::Batch => Arc::new(BatchCommsEventProducer::new(
            publisher,
            config.comms_subject.clone(),
        )),
    };

    let service = Arc::new(CommsRequestService::new(producer));
    let app = build_router(AppState::new(service));

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Messaging gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    nats_client.close().await;
    info!("Messaging gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
