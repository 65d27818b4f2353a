//! Model loading error types.

use thiserror::Error;

/// Errors that can occur while loading an application model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The description could not be read or failed schema validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The description passed validation but could not be deserialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
