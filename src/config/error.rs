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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Consistency ratio threshold must be a finite number of at least 1")]
    InvalidRatioThreshold,

    #[error("Queries per customer must be greater than zero")]
    InvalidQueriesPerCustomer,

    #[error("Percentage '{0}' must be between 0 and 100")]
    PercentageOutOfRange(&'static str),
}
