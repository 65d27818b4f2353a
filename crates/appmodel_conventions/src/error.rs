//! Convention error types.

use thiserror::Error;

/// Errors that can occur while registering or applying conventions.
///
/// Only [`ConventionError::InvalidArgument`] is raised by this crate. The
/// other variants exist for convention authors; whatever a convention returns
/// reaches the caller of `apply` unchanged.
#[derive(Debug, Error)]
pub enum ConventionError {
    /// A required argument was absent. Carries the argument name.
    #[error("Invalid argument: `{0}` must be provided")]
    InvalidArgument(&'static str),

    /// A convention rejected the node it was applied to.
    #[error("Convention failed: {0}")]
    Failed(String),

    /// Any other error raised by a convention.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ConventionError {
    /// Creates an invalid argument error for the named argument.
    pub fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument(argument)
    }

    /// Creates a convention failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Returns the argument name if this is an invalid argument error.
    pub fn invalid_argument_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument(name) => Some(name),
            _ => None,
        }
    }
}
