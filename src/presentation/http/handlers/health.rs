//! Health Check Handlers
//!
//! Provides health check endpoints for liveness and readiness checks.
//!
//! # Endpoints
//! - `GET /health` - Basic health check
//! - `GET /health/live` - Liveness check (is the server running?)
//! - `GET /health/ready` - Readiness check (is the storage connector reachable?)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::domain::Connector;
use crate::startup::AppState;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Storage round trips slower than this report `degraded`.
const DEGRADED_LATENCY_MS: u64 = 100;

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Detailed readiness response
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub storage: StorageHealth,
}

/// Storage connector health
#[derive(Debug, Serialize)]
pub struct StorageHealth {
    pub status: HealthStatus,
    pub backend: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Simple liveness response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness check - checks if the server is running
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// Readiness check - 200 while storage answers, 503 otherwise
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let storage = check_storage(state.connector.as_ref()).await;
    let status = storage.status;

    let response = DetailedHealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: SERVER_START.elapsed().as_secs(),
        started_at: SERVER_START_TIME.to_rfc3339(),
        storage,
    };

    let status_code = match status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Ping the connector and grade the round trip
async fn check_storage(connector: &dyn Connector) -> StorageHealth {
    let start = Instant::now();
    match connector.ping().await {
        Ok(()) => {
            let latency = start.elapsed().as_millis() as u64;
            StorageHealth {
                status: status_for_latency(latency),
                backend: connector.backend(),
                latency_ms: Some(latency),
                message: None,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Storage readiness check failed");
            StorageHealth {
                status: HealthStatus::Unhealthy,
                backend: connector.backend(),
                latency_ms: None,
                message: Some(format!("Storage connection failed: {}", e)),
            }
        }
    }
}

fn status_for_latency(latency_ms: u64) -> HealthStatus {
    if latency_ms < DEGRADED_LATENCY_MS {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    }
}
