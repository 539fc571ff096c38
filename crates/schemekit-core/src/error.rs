//! Error handling for SchemeKit
//!
//! Provides the error type shared by the workspace crates. Crate-specific
//! enums (settings, codec) convert into it where they cross crate borders.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read, written or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error from a string message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type for SchemeKit operations
pub type Result<T> = std::result::Result<T, Error>;
