//! Error types for bogey-core

use thiserror::Error;

/// Result type alias using bogey-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bogey-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// No caller identity was provided for an operation that requires one
    #[error("Not authenticated")]
    Unauthenticated,

    /// Caller does not own the referenced round
    #[error("Round not found or unauthorized: {0}")]
    Unauthorized(String),

    /// Referenced round or hole does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input, rejected before the store is touched
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// `SQLite` error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error hides the target from the caller.
    ///
    /// Presentation layers show `NotFound` and `Unauthorized` the same way so
    /// other golfers' rounds can't be discovered.
    pub const fn is_access_denied(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Unauthorized(_))
    }
}
