//! Courier contact-form relay service.
//!
//! Main entry point. Initializes tracing, loads configuration, wires the
//! application state, and serves until shutdown.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use courier_api::{AppState, Config};
use courier_core::RealClock;
use courier_slack::WebhookClient;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting Courier relay service");

    let config = Config::load()?;
    info!(
        host = %config.host,
        port = config.port,
        credential_source = ?config.credential_source,
        "Configuration loaded"
    );

    let slack = WebhookClient::new(config.to_client_config())
        .context("Failed to build webhook client")?;
    let state = AppState::new(config.credential_store(), slack, Arc::new(RealClock::new()));

    let addr = config.parse_server_addr()?;
    let request_timeout = Duration::from_secs(config.request_timeout);

    info!(addr = %addr, "Courier is ready to relay submissions");

    courier_api::start_server(state, addr, request_timeout)
        .await
        .context("Server failed")?;

    info!("Courier shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,courier=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
