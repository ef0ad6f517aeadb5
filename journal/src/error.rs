//! Journal error types.

use thiserror::Error;

/// Journal errors.
#[derive(Debug, Error)]
pub enum JournalError {
    /// IO error during journal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid entry format.
    #[error("invalid entry format at line {line}: {message}")]
    InvalidFormat { line: usize, message: String },

    /// Recovery error.
    #[error("recovery error at seq {seq}: {message}")]
    RecoveryError { seq: u64, message: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A failed append could not be removed from the file.
    #[error("journal {path} holds a partial write and no longer accepts appends")]
    Damaged { path: String },
}

impl JournalError {
    pub fn invalid_format(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            line,
            message: message.into(),
        }
    }

    pub fn recovery_error(seq: u64, message: impl Into<String>) -> Self {
        Self::RecoveryError {
            seq,
            message: message.into(),
        }
    }
}

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;
