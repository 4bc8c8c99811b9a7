//! Error types for the zoneup updater
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for zoneup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the zoneup updater
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (unreadable file, malformed line, missing key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network errors during public IP resolution
    #[error("Network error: {0}")]
    Network(String),

    /// Missing or partial provider credentials, or rejected authentication
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Any other DNS provider API failure
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a credentials error
    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::Credentials(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
