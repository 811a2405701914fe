//! PostgreSQL Connector
//!
//! sqlx implementation of the [`Connector`] contract. Maps between the
//! relational schema (`users`, `chats`, `chat_members`, `messages`) and the
//! domain entities.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::normalize_members;
use crate::domain::{Chat, Connector, ConnectorError, Message, User};
use crate::infrastructure::metrics;

const BACKEND: &str = "postgres";

/// Database row representation of the users table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: from_db_id(self.id),
            username: self.username,
            created_at: self.created_at,
        }
    }
}

/// Database row representation of the chats table, without members.
#[derive(Debug, sqlx::FromRow)]
struct ChatRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl ChatRow {
    fn into_chat(self, members: Vec<u64>) -> Chat {
        Chat {
            id: from_db_id(self.id),
            name: self.name,
            members,
            created_at: self.created_at,
        }
    }
}

/// Database row representation of the messages table.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: i64,
    chat_id: i64,
    author_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl MessageRow {
    fn into_message(self) -> Message {
        Message {
            id: from_db_id(self.id),
            chat_id: from_db_id(self.chat_id),
            author_id: from_db_id(self.author_id),
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// Keys are BIGSERIAL, so anything above `i64::MAX` cannot be stored.
fn to_db_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

fn require_db_id(id: u64) -> Result<i64, ConnectorError> {
    to_db_id(id).ok_or(ConnectorError::InvalidId(id))
}

fn from_db_id(id: i64) -> u64 {
    id as u64
}

/// Translate a unique-constraint violation into `Conflict`, keep anything else as a database error.
fn map_unique_violation(e: sqlx::Error, conflict: impl FnOnce() -> String) -> ConnectorError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ConnectorError::Conflict(conflict())
        }
        _ => ConnectorError::Database(e),
    }
}

/// PostgreSQL connector.
///
/// Owns the connection pool; clones share the same pool.
#[derive(Clone)]
pub struct PgConnector {
    pool: PgPool,
}

impl PgConnector {
    /// Create a new PgConnector with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn members_of(
        &self,
        chat_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<u64>>, ConnectorError> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT chat_id, user_id
            FROM chat_members
            WHERE chat_id = ANY($1)
            ORDER BY chat_id, user_id
            "#,
        )
        .bind(chat_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut members: HashMap<i64, Vec<u64>> = HashMap::with_capacity(chat_ids.len());
        for (chat_id, user_id) in rows {
            members.entry(chat_id).or_default().push(from_db_id(user_id));
        }
        Ok(members)
    }
}

#[async_trait]
impl Connector for PgConnector {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn create_user(&self, username: &str) -> Result<User, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "create_user");

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username, created_at
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || format!("user '{}' already exists", username)))?;

        Ok(row.into_user())
    }

    async fn check_username(&self, username: &str) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_username");
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn check_user_id(&self, id: u64) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_user_id");
        let Some(id) = to_db_id(id) else {
            return Ok(false);
        };
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_chat(&self, name: &str, members: &[u64]) -> Result<Chat, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "create_chat");

        let members = normalize_members(members);
        let member_ids = members
            .iter()
            .map(|&id| require_db_id(id))
            .collect::<Result<Vec<_>, _>>()?;

        // Chat row and memberships commit together; dropping `tx` on an
        // early return rolls the chat row back.
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            INSERT INTO chats (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || format!("chat '{}' already exists", name)))?;

        sqlx::query(
            r#"
            INSERT INTO chat_members (chat_id, user_id)
            SELECT $1, member_id FROM UNNEST($2::BIGINT[]) AS member_id
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(row.id)
        .bind(&member_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(chat_id = row.id, members = members.len(), "Chat created");
        Ok(row.into_chat(members))
    }

    async fn check_chat_name(&self, name: &str) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_chat_name");
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM chats WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn check_chat_id(&self, id: u64) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_chat_id");
        let Some(id) = to_db_id(id) else {
            return Ok(false);
        };
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM chats WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn get_chats_for_user(&self, user_id: u64) -> Result<Vec<Chat>, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "get_chats_for_user");
        let Some(user_id) = to_db_id(user_id) else {
            return Ok(Vec::new());
        };

        // The inner join against the latest message per chat leaves out
        // chats nobody has written to yet.
        let rows = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT c.id, c.name, c.created_at
            FROM chats c
            JOIN chat_members cm ON cm.chat_id = c.id
            JOIN (
                SELECT chat_id, MAX(created_at) AS last_message_at, MAX(id) AS last_message_id
                FROM messages
                GROUP BY chat_id
            ) lm ON lm.chat_id = c.id
            WHERE cm.user_id = $1
            ORDER BY lm.last_message_at DESC, lm.last_message_id DESC, c.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let chat_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut members = self.members_of(&chat_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let chat_members = members.remove(&row.id).unwrap_or_default();
                row.into_chat(chat_members)
            })
            .collect())
    }

    async fn send_message(
        &self,
        chat_id: u64,
        author_id: u64,
        text: &str,
    ) -> Result<Message, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "send_message");

        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (chat_id, author_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, chat_id, author_id, text, created_at
            "#,
        )
        .bind(require_db_id(chat_id)?)
        .bind(require_db_id(author_id)?)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_message())
    }

    async fn get_messages(&self, chat_id: u64) -> Result<Vec<Message>, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "get_messages");
        let Some(chat_id) = to_db_id(chat_id) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, chat_id, author_id, text, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MessageRow::into_message).collect())
    }

    async fn ping(&self) -> Result<(), ConnectorError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
