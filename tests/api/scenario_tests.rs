//! End-to-end conversation flow driven through `axum-test`.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use crate::common::TestApp;

fn server() -> TestServer {
    TestServer::new(TestApp::new().router).expect("failed to build test server")
}

async fn post(server: &TestServer, path: &str, body: Value) -> Value {
    let response = server.post(path).json(&body).await;
    response.json::<Value>()
}

#[tokio::test]
async fn test_two_users_talk() {
    let server = server();

    let alice = post(&server, "/users/add", json!({ "username": "alice" })).await["id"].clone();
    let bob = post(&server, "/users/add", json!({ "username": "bob" })).await["id"].clone();

    let chat = post(
        &server,
        "/chats/add",
        json!({ "name": "alice-bob", "users": [alice, bob] }),
    )
    .await["id"]
        .clone();

    for (author, text) in [(&alice, "hi bob"), (&bob, "hi alice"), (&alice, "how are you?")] {
        server
            .post("/messages/add")
            .json(&json!({ "chat": chat, "author": author, "text": text }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let chats = post(&server, "/chats/get", json!({ "user": bob })).await;
    assert_eq!(chats["chats"][0]["id"], chat);
    assert_eq!(chats["chats"][0]["name"], "alice-bob");

    let messages = post(&server, "/messages/get", json!({ "chat": chat })).await;
    let texts: Vec<&str> = messages["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["hi bob", "hi alice", "how are you?"]);
}

#[tokio::test]
async fn test_rejected_requests_leave_state_unchanged() {
    let server = server();

    server
        .post("/users/add")
        .json(&json!({ "username": "" }))
        .expect_failure()
        .await
        .assert_status_bad_request();

    // The first successful user still gets id 1
    let created = post(&server, "/users/add", json!({ "username": "first" })).await;
    assert_eq!(created, json!({ "id": 1 }));
}
