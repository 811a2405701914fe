//! # Domain Layer
//!
//! Core types of the chat backend, independent of HTTP and of any particular
//! storage engine.
//!
//! ## Structure
//!
//! - **entities**: User, Chat and Message
//! - **connector**: the storage contract every backend implements
//!
//! The application layer only ever talks to storage through [`Connector`],
//! so backends can be swapped by configuration.

pub mod connector;
pub mod entities;

// Re-export commonly used types
pub use connector::{Connector, ConnectorError};
pub use entities::*;
