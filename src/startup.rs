//! Application Startup
//!
//! Application building, server initialization and graceful shutdown.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::config::Settings;
use crate::domain::Connector;
use crate::infrastructure::connectors;
use crate::presentation::http::{create_router, handlers::health};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn Connector>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(connector: Arc<dyn Connector>, settings: Settings) -> Self {
        Self {
            connector,
            settings: Arc::new(settings),
        }
    }
}

/// Build the full router: routes plus tracing and CORS layers.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    create_router(state)
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    connector: Arc<dyn Connector>,
    shutdown_grace: Duration,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        settings.validate()?;
        health::init_server_start();

        let connector = connectors::connect(&settings)
            .await
            .context("failed to initialize storage connector")?;

        let addr = settings.server_addr();
        let shutdown_grace = settings.server.shutdown_grace();
        let state = AppState::new(connector.clone(), settings);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            connector,
            shutdown_grace,
        })
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the server until a shutdown signal arrives.
    ///
    /// In-flight requests get the configured grace period to finish, after
    /// which the server is dropped. The connector is closed either way.
    pub async fn run_until_stopped(self) -> Result<()> {
        let Self {
            listener,
            router,
            connector,
            shutdown_grace,
        } = self;

        let (signal_tx, signal_rx) = oneshot::channel::<()>();
        let server = axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signal_tx.send(());
        })
        .into_future();
        let mut server = std::pin::pin!(server);

        let result = tokio::select! {
            biased;
            result = &mut server => result,
            Ok(()) = signal_rx => {
                tracing::info!(
                    grace_secs = shutdown_grace.as_secs(),
                    "Shutdown signal received, draining requests"
                );
                match tokio::time::timeout(shutdown_grace, &mut server).await {
                    Ok(result) => result,
                    Err(_) => {
                        tracing::warn!("Grace period elapsed, dropping remaining connections");
                        Ok(())
                    }
                }
            }
        };

        connector.close().await;
        tracing::info!("Server stopped");

        result.context("server error")
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
