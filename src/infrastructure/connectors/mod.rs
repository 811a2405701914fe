//! Storage Connectors
//!
//! Concrete [`Connector`] backends and the registry that selects one by its
//! identifier string.
//!
//! ## Available Backends
//!
//! - **postgres** - [`PgConnector`], sqlx over a PostgreSQL pool
//! - **memory** - [`MemoryConnector`], process-local state for development and tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use chat_backend::infrastructure::connectors;
//!
//! let connector = connectors::connect(&settings).await?;
//! let exists = connector.check_username("alice").await?;
//! ```

pub mod memory;
pub mod postgres;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::Settings;
use crate::domain::{Connector, ConnectorError};
use crate::infrastructure::database;

pub use memory::MemoryConnector;
pub use postgres::PgConnector;

/// Storage backends known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    Postgres,
    Memory,
}

/// Accepted identifiers, matched case-insensitively.
const REGISTRY: &[(&str, ConnectorKind)] = &[
    ("postgres", ConnectorKind::Postgres),
    ("postgresql", ConnectorKind::Postgres),
    ("postgressql", ConnectorKind::Postgres),
    ("postgres_sql", ConnectorKind::Postgres),
    ("pg", ConnectorKind::Postgres),
    ("memory", ConnectorKind::Memory),
    ("in_memory", ConnectorKind::Memory),
    ("in-memory", ConnectorKind::Memory),
    ("inmemory", ConnectorKind::Memory),
];

impl ConnectorKind {
    /// Canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }

    /// Every accepted identifier, comma separated.
    pub fn identifiers() -> String {
        REGISTRY
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConnectorKind {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        REGISTRY
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| ConnectorError::UnknownBackend {
                name: s.to_string(),
                expected: Self::identifiers(),
            })
    }
}

/// Build the connector selected by `connector.backend` and make sure it is usable.
///
/// This is the single connect-or-fail step of the process: the PostgreSQL
/// backend opens its pool, applies migrations when enabled and answers a
/// ping before the server starts accepting requests.
pub async fn connect(settings: &Settings) -> Result<Arc<dyn Connector>, ConnectorError> {
    let kind: ConnectorKind = settings.connector.backend.parse()?;

    let connector: Arc<dyn Connector> = match kind {
        ConnectorKind::Postgres => {
            let pool = database::create_pool(&settings.database).await?;
            tracing::info!(
                host = %settings.database.host,
                database = %settings.database.name,
                max_connections = settings.database.max_connections,
                "Database connection pool created"
            );

            if settings.database.run_migrations {
                database::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Arc::new(PgConnector::new(pool))
        }
        ConnectorKind::Memory => Arc::new(MemoryConnector::new()),
    };

    connector.ping().await?;
    tracing::info!(backend = connector.backend(), "Storage connector ready");

    Ok(connector)
}
