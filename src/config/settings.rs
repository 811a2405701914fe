//! Application settings and configuration structures.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::infrastructure::connectors::ConnectorKind;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, shutdown)
    pub server: ServerSettings,

    /// Storage backend selection
    pub connector: ConnectorSettings,

    /// Relational database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Seconds in-flight requests get to finish after a shutdown signal
    pub shutdown_grace_secs: u64,
}

/// Storage backend selection.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorSettings {
    /// Backend identifier, e.g. "postgres" or "memory"
    pub backend: String,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Full connection URL; takes precedence over the individual fields
    pub url: Option<String>,

    pub login: String,
    pub password: String,
    pub host: String,
    pub port: u16,

    /// Database name
    pub name: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml and config/{RUN_ENV}.toml
    /// 3. APP__ prefixed environment variables
    /// 4. Short aliases (HOST, PORT, CONNECTOR_TYPE, DATABASE_*)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or names an unknown storage backend.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(Config::builder(), &environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=9000 -> server.port = 9000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("connector.backend", std::env::var("CONNECTOR_TYPE").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.login", std::env::var("DATABASE_LOGIN").ok())?
            .set_override_option("database.password", std::env::var("DATABASE_PASSWORD").ok())?
            .set_override_option("database.host", std::env::var("DATABASE_HOST").ok())?
            .set_override_option("database.port", std::env::var("DATABASE_PORT").ok())?
            .set_override_option("database.name", std::env::var("DATABASE_NAME").ok())?
            .build()?;

        Self::from_config(config)
    }

    /// Settings made of the built-in defaults only.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_config(Self::defaults(Config::builder(), "development")?.build()?)
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9000)?
            .set_default("server.shutdown_grace_secs", 5)?
            .set_default("connector.backend", ConnectorKind::Postgres.as_str())?
            .set_default("database.login", "postgres")?
            .set_default("database.password", "postgres")?
            .set_default("database.host", "127.0.0.1")?
            .set_default("database.port", 5432)?
            .set_default("database.name", "chat")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would only fail later at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.connector_kind()?;
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Message("server.host must not be empty".into()));
        }
        Ok(())
    }

    /// The storage backend selected by `connector.backend`.
    pub fn connector_kind(&self) -> Result<ConnectorKind, ConfigError> {
        self.connector
            .backend
            .parse::<ConnectorKind>()
            .map_err(|e| ConfigError::Message(e.to_string()))
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerSettings {
    /// Grace period for draining in-flight requests on shutdown.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

impl DatabaseSettings {
    /// Get the connection URL, assembling it from parts when no explicit URL is set.
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.login, self.password, self.host, self.port, self.name
            ),
        }
    }
}
