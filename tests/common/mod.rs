//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use fake::{faker::internet::en::Username, Fake};
use serde_json::{json, Value};
use tower::ServiceExt;

use chat_backend::config::Settings;
use chat_backend::domain::Connector;
use chat_backend::infrastructure::connectors::MemoryConnector;
use chat_backend::startup::{build_router, AppState};

/// Test application backed by the in-memory connector
pub struct TestApp {
    pub router: Router,
    pub connector: Arc<dyn Connector>,
}

impl TestApp {
    pub fn new() -> Self {
        let connector: Arc<dyn Connector> = Arc::new(MemoryConnector::new());
        let mut settings = Settings::with_defaults().expect("default settings");
        settings.connector.backend = "memory".into();

        let state = AppState::new(connector.clone(), settings);
        Self {
            router: build_router(state),
            connector,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with a raw JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// POST a JSON value and return the status and decoded body (`Null` when empty)
    pub async fn call(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self.post_json(uri, &body.to_string()).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    /// Register a user and return its id
    pub async fn create_user(&self, username: &str) -> u64 {
        let (status, body) = self.call("/users/add", json!({ "username": username })).await;
        assert_eq!(status, StatusCode::CREATED, "create user {username}: {body}");
        body["id"].as_u64().unwrap()
    }

    /// Create a chat and return its id
    pub async fn create_chat(&self, name: &str, users: &[u64]) -> u64 {
        let (status, body) = self
            .call("/chats/add", json!({ "name": name, "users": users }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create chat {name}: {body}");
        body["id"].as_u64().unwrap()
    }

    /// Send a message and return its id
    pub async fn send_message(&self, chat: u64, author: u64, text: &str) -> u64 {
        let (status, body) = self
            .call(
                "/messages/add",
                json!({ "chat": chat, "author": author, "text": text }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "send message: {body}");
        body["id"].as_u64().unwrap()
    }
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

/// Generate a unique test username
pub fn unique_username() -> String {
    let base: String = Username().fake();
    format!("{}_{}", base, &uuid::Uuid::new_v4().to_string()[..8])
}
