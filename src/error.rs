//! Common error types for stagefront

use thiserror::Error;

/// Common result type for stagefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A third-party integration is missing required configuration
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// A third-party service call failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
