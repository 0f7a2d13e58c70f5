//! Error types for floodguard-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration
    #[error("invalid configuration: {field}: {message}")]
    InvalidConfig {
        /// Config field name
        field: String,
        /// Detailed message
        message: String,
    },

    /// Transport stop or adapter stop failed
    #[error("transport error: {0}")]
    Transport(String),

    /// Host reload failed
    #[error("reload error: {0}")]
    Reload(String),

    /// Reason attached to a bot taken offline by the receive guard
    #[error("bot is under a message flood, temporarily offline")]
    UnderAttack,

    /// Internal error (runtime unavailable, etc.)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `InvalidConfig` error
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}
