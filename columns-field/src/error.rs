//! Error types for the field layer.

use thiserror::Error;

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur while reading or writing fields.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The host rejected a field write.
    #[error("host error: {0}")]
    Host(String),

    /// The entry selection dialog failed.
    #[error("entry picker failed: {0}")]
    Picker(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
