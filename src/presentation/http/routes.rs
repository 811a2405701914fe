//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/users", user_routes())
        .nest("/chats", chat_routes())
        .nest("/messages", message_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/add", post(handlers::user::create_user))
}

fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(handlers::chat::create_chat))
        .route("/get", post(handlers::chat::get_chats))
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(handlers::message::send_message))
        .route("/get", post(handlers::message::get_messages))
}
