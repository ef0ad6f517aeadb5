//! Session error types.

use cograph_core::GraphError;
use cograph_mutation::MutationError;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Mutation rejected or read target missing.
    #[error("mutation error: {0}")]
    MutationError(#[from] MutationError),

    /// Storage lookup failed.
    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    /// Journal error.
    #[error("journal error: {0}")]
    JournalError(#[from] cograph_journal::JournalError),

    /// Configuration could not be loaded.
    #[error("config error: {message}")]
    Config { message: String },
}

impl SessionError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The mutation error, if this is one.
    pub fn as_mutation(&self) -> Option<&MutationError> {
        match self {
            Self::MutationError(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Self::MutationError(e) => e.is_not_found(),
            Self::GraphError(GraphError::NodeNotFound(_) | GraphError::LinkNotFound(_)) => true,
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.as_mutation().is_some_and(MutationError::is_unauthorized)
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(err: toml::de::Error) -> Self {
        SessionError::config(err.to_string())
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
