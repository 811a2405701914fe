//! PostgreSQL connector tests.
//!
//! Need a reachable database in `DATABASE_URL`; run with
//! `cargo test -- --ignored`.

use chat_backend::domain::{Connector, ConnectorError};
use chat_backend::infrastructure::connectors::PgConnector;
use chat_backend::infrastructure::database;
use sqlx::postgres::PgPoolOptions;

use crate::common::unique_username;

async fn connector() -> PgConnector {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    database::run_migrations(&pool).await.expect("migrations");
    PgConnector::new(pool)
}

#[tokio::test]
#[ignore]
async fn test_users_are_unique() {
    let connector = connector().await;
    let name = unique_username();

    let user = connector.create_user(&name).await.unwrap();
    assert!(connector.check_username(&name).await.unwrap());
    assert!(connector.check_user_id(user.id).await.unwrap());
    assert!(!connector.check_user_id(u64::MAX).await.unwrap());

    let err = connector.create_user(&name).await.unwrap_err();
    assert!(matches!(err, ConnectorError::Conflict(_)));
}

#[tokio::test]
#[ignore]
async fn test_chat_listing_and_messages() {
    let connector = connector().await;
    let a = connector.create_user(&unique_username()).await.unwrap().id;
    let b = connector.create_user(&unique_username()).await.unwrap().id;

    let quiet = connector
        .create_chat(&unique_username(), &[a, b, a])
        .await
        .unwrap();
    assert_eq!(quiet.members.len(), 2);

    let busy = connector.create_chat(&unique_username(), &[a]).await.unwrap();
    let first = connector.send_message(busy.id, a, "one").await.unwrap();
    let second = connector.send_message(busy.id, b, "two").await.unwrap();

    let chats = connector.get_chats_for_user(a).await.unwrap();
    let ids: Vec<u64> = chats.iter().map(|c| c.id).collect();
    assert!(ids.contains(&busy.id));
    assert!(!ids.contains(&quiet.id));

    let messages = connector.get_messages(busy.id).await.unwrap();
    let ids: Vec<u64> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    connector.close().await;
}

#[tokio::test]
#[ignore]
async fn test_duplicate_chat_name_conflicts() {
    let connector = connector().await;
    let a = connector.create_user(&unique_username()).await.unwrap().id;
    let name = unique_username();

    connector.create_chat(&name, &[a]).await.unwrap();
    let err = connector.create_chat(&name, &[a]).await.unwrap_err();

    assert!(matches!(err, ConnectorError::Conflict(_)));
    assert!(connector.check_chat_name(&name).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_failed_membership_rolls_back_chat() {
    let connector = connector().await;
    let a = connector.create_user(&unique_username()).await.unwrap().id;
    let name = unique_username();

    // The chat row is inserted first; the membership for the unknown user
    // then violates the foreign key inside the same transaction.
    let err = connector
        .create_chat(&name, &[a, i64::MAX as u64])
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::Database(_)));
    assert!(!connector.check_chat_name(&name).await.unwrap());
}
