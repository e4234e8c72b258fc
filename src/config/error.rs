//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool size must be between 1 and 10, got {0}")]
    InvalidPoolSize(u32),

    #[error("Acquire timeout must be between 1 and 120 seconds, got {0}")]
    InvalidAcquireTimeout(u64),

    #[error("Autosave interval must be between 1 and 3600 seconds, got {0}")]
    InvalidAutosaveInterval(u64),

    #[error("Draft key may only contain letters, digits, '-' and '_'")]
    InvalidDraftKey,

    #[error("Identity user id must not be blank")]
    InvalidUserId,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
