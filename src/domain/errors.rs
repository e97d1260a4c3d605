//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! A missing record is not an error at the service level; `NotFound` only
//! surfaces when a store is asked to act on a row that vanished.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Resource not found
    #[error("Resource not found")]
    NotFound,
    /// Validation error with message
    #[error("Validation error: {0}")]
    Validation(String),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
