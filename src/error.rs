//! Structured error handling for service startup and runtime failures.

use thiserror::Error;

/// Top-level error type for the service.
///
/// Request-scoped failures are handled by the web layer's `ApiError`;
/// this type covers configuration, database, and server lifecycle errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
