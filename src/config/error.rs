//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while supplying a machine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied at all
    #[error("No configuration supplied")]
    MissingConfiguration,

    /// The document is not a valid configuration
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}
