//! Configuration error types.

use thiserror::Error;

/// Failure to load configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Failure of the post-load validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server port must not be 0")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("content store {0} must not be empty")]
    MissingContentStoreField(&'static str),
}
