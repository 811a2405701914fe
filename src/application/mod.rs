//! Application Layer
//!
//! Contains the validation/orchestration services and the data transfer
//! objects (DTOs) exchanged with the HTTP layer. Every mutating operation
//! validates shape, then checks existence and uniqueness through the
//! storage connector, and only then writes.

pub mod dto;
pub mod services;
