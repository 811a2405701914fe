//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool and migrations (PostgreSQL)
//! - Storage connectors and the backend registry
//! - Prometheus metrics

pub mod connectors;
pub mod database;
pub mod metrics;
