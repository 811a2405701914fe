//! Health Check and Metrics API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{body_bytes, body_json, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_liveness_reports_alive() {
    let app = TestApp::new();

    let json = body_json(app.get("/health/live").await).await;

    assert_eq!(json["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_storage() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["storage"]["backend"], "memory");
    assert!(json["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_metrics_include_request_counts() {
    let app = TestApp::new();
    app.create_user("metrics").await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("chat_backend_http_requests_total"));
    assert!(text.contains("/users/add"));
}
