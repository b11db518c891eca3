//! Error types for the configuration layer.

use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or saving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Content-type catalog lookup failed.
    #[error("content type catalog unavailable: {0}")]
    Catalog(String),

    /// Stored installation parameters could not be read.
    #[error("installation parameters unavailable: {0}")]
    Parameters(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
