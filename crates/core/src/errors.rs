//! Core error types for fundledger.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::ledger::ContributionError;
use crate::session::AuthError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger application.
///
/// Every variant is recoverable: callers either show the message and let the
/// user correct their input, or fall back to a documented default.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Contribution rejected: {0}")]
    Contribution(#[from] ContributionError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Persistence operation failed: {0}")]
    Persistence(#[from] DatabaseError),

    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Stable machine-readable code for display layers.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Contribution(e) => e.code(),
            Error::Auth(e) => e.code(),
            Error::Persistence(_) => "PERSISTENCE_ERROR",
            Error::Unavailable(_) => "UNAVAILABLE",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Unexpected(_) => "UNEXPECTED",
        }
    }
}

/// Storage-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// A write could not be completed.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Json(err))
    }
}
