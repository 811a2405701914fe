//! Chat API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::TestApp;

#[tokio::test]
async fn test_create_chat_with_members() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let b = app.create_user("b").await;

    let (status, body) = app
        .call("/chats/add", json!({ "name": "team", "users": [a, b] }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_u64().is_some());
}

#[tokio::test]
async fn test_missing_member_is_not_exist_and_name_stays_free() {
    let app = TestApp::new();
    let a = app.create_user("a").await;

    let (status, body) = app
        .call("/chats/add", json!({ "name": "team", "users": [a, 42] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1);
    assert!(body["description"].as_str().unwrap().contains("42"));

    // Nothing was written, so the same name is still available
    app.create_chat("team", &[a]).await;
}

#[tokio::test]
async fn test_duplicate_chat_name_is_already_exist() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    app.create_chat("team", &[a]).await;

    let (status, body) = app
        .call("/chats/add", json!({ "name": "team", "users": [a] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 0);
}

#[test_case(json!({ "name": "", "users": [1] }) ; "empty name")]
#[test_case(json!({ "name": "team", "users": [] }) ; "no members")]
#[test_case(json!({ "name": "team" }) ; "missing members")]
#[test_case(json!({}) ; "empty object")]
#[test_case(json!({ "name": null, "users": [1] }) ; "null name")]
#[test_case(json!({ "name": "team", "users": null }) ; "null members")]
#[tokio::test]
async fn test_incomplete_chat_is_empty_fields(body: serde_json::Value) {
    let app = TestApp::new();
    app.create_user("a").await;

    let (status, body) = app.call("/chats/add", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_get_chats_for_unknown_user_is_not_exist() {
    let app = TestApp::new();

    let (status, body) = app.call("/chats/get", json!({ "user": 7 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1);
}

#[tokio::test]
async fn test_get_chats_hides_silent_chats() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    app.create_chat("quiet", &[a]).await;

    let (status, body) = app.call("/chats/get", json!({ "user": a })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "chats": [] }));
}

#[tokio::test]
async fn test_get_chats_orders_by_latest_message() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let b = app.create_user("b").await;
    let first = app.create_chat("first", &[a, b]).await;
    let second = app.create_chat("second", &[b, a]).await;

    app.send_message(first, a, "old").await;
    app.send_message(second, b, "newer").await;

    let (_, body) = app.call("/chats/get", json!({ "user": a })).await;
    let chats = body["chats"].as_array().unwrap();
    let ids: Vec<u64> = chats.iter().map(|c| c["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![second, first]);

    let chat = &chats[0];
    assert_eq!(chat["name"], "second");
    assert_eq!(chat["users"], json!([a, b]));
    assert!(chat["created_at"].is_string());

    app.send_message(first, b, "newest").await;
    let (_, body) = app.call("/chats/get", json!({ "user": b })).await;
    let ids: Vec<u64> = body["chats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_chats_are_scoped_to_members() {
    let app = TestApp::new();
    let a = app.create_user("a").await;
    let outsider = app.create_user("outsider").await;
    let chat = app.create_chat("private", &[a]).await;
    app.send_message(chat, a, "hi").await;

    let (status, body) = app.call("/chats/get", json!({ "user": outsider })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chats"], json!([]));
}
