//! # Chat Backend Library
//!
//! A minimal group chat backend:
//! - users, chats with a fixed member set, and messages
//! - a JSON-over-POST HTTP API
//! - a pluggable storage [`Connector`](domain::Connector) with PostgreSQL and
//!   in-memory backends
//!
//! ## Architecture
//!
//! - **Domain Layer**: entities and the storage connector contract
//! - **Application Layer**: validation and orchestration services, DTOs
//! - **Infrastructure Layer**: connector backends, connection pool, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_backend/
//! +-- config/         Configuration management
//! +-- domain/         Entities and the Connector trait
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Connector backends, database pool, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error types and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - entities and storage contract
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
