//! Service Error Taxonomy

use crate::domain::ConnectorError;

/// Outcome of a rejected or failed service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A uniqueness rule would be violated
    #[error("{0}")]
    AlreadyExist(String),

    /// A referenced entity is absent
    #[error("{0}")]
    NotExist(String),

    /// A required field is missing or empty
    #[error("{0}")]
    EmptyFields(String),

    #[error("storage failure: {0}")]
    Storage(#[from] ConnectorError),
}

impl ServiceError {
    /// Map a failed write. A store-level uniqueness conflict means a
    /// concurrent request won the race after our pre-check passed.
    pub(crate) fn from_write(err: ConnectorError) -> Self {
        match err {
            ConnectorError::Conflict(msg) => ServiceError::AlreadyExist(msg),
            other => ServiceError::Storage(other),
        }
    }

    pub(crate) fn empty_fields(errors: validator::ValidationErrors) -> Self {
        ServiceError::EmptyFields(crate::shared::validation::describe(&errors))
    }
}
