//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_messages_are_returned_oldest_first() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let b = app.create_user("b").await;
    let chat = app.create_chat("team", &[a, b]).await;

    let first = app.send_message(chat, a, "hi").await;
    let second = app.send_message(chat, b, "hello").await;

    let (status, body) = app.call("/messages/get", json!({ "chat": chat })).await;
    assert_eq!(status, StatusCode::OK);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);

    assert_eq!(messages[0]["id"], first);
    assert_eq!(messages[0]["chat"], chat);
    assert_eq!(messages[0]["author"], a);
    assert_eq!(messages[0]["text"], "hi");

    assert_eq!(messages[1]["id"], second);
    assert_eq!(messages[1]["author"], b);
    assert_eq!(messages[1]["text"], "hello");
    assert!(messages[1]["created_at"].is_string());
}

#[tokio::test]
async fn test_empty_chat_has_no_messages() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let chat = app.create_chat("team", &[a]).await;

    let (status, body) = app.call("/messages/get", json!({ "chat": chat })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "messages": [] }));
}

#[tokio::test]
async fn test_send_to_unknown_chat_is_not_exist() {
    let app = TestApp::new();
    let a = app.create_user("a").await;

    let (status, body) = app
        .call("/messages/add", json!({ "chat": 99, "author": a, "text": "x" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1);
}

#[tokio::test]
async fn test_send_from_unknown_author_is_not_exist() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let chat = app.create_chat("team", &[a]).await;

    let (status, body) = app
        .call("/messages/add", json!({ "chat": chat, "author": 99, "text": "x" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1);
}

#[tokio::test]
async fn test_empty_text_is_empty_fields() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let chat = app.create_chat("team", &[a]).await;

    let (status, body) = app
        .call("/messages/add", json!({ "chat": chat, "author": a, "text": "" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_null_text_is_empty_fields() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let chat = app.create_chat("team", &[a]).await;

    let (status, body) = app
        .call("/messages/add", json!({ "chat": chat, "author": a, "text": null }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_non_member_may_post() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let outsider = app.create_user("outsider").await;
    let chat = app.create_chat("team", &[a]).await;

    let (status, _) = app
        .call(
            "/messages/add",
            json!({ "chat": chat, "author": outsider, "text": "knock knock" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_get_messages_of_unknown_chat_is_not_exist() {
    let app = TestApp::new();

    let (status, body) = app.call("/messages/get", json!({ "chat": 3 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1);
}
