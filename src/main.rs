//! # Chat Backend
//!
//! Entry point: initializes logging, loads configuration, connects the
//! storage backend and serves the HTTP API until a shutdown signal.

use anyhow::Result;
use tracing::info;

use chat_backend::config::Settings;
use chat_backend::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    chat_backend::telemetry::init_tracing();

    info!("Starting chat backend...");

    // Environment, .env and optional config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = %settings.connector.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
