//! Common error types for cograph.

use crate::{LinkId, NodeId};
use thiserror::Error;

/// Errors raised by the raw graph storage.
///
/// Storage does not know about callers or ownership; these only describe
/// structural problems with the requested records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Link not found.
    #[error("Link not found: {0}")]
    LinkNotFound(LinkId),

    /// A node with this id is already stored.
    #[error("Node already exists: {0}")]
    DuplicateNode(NodeId),

    /// Nodes must name a non-zero creator.
    #[error("Node has no creator: {0}")]
    MissingCreator(NodeId),

    /// Link ids must be stored densely in creation order.
    #[error("Link id out of sequence: expected {expected}, got {actual}")]
    LinkOutOfSequence { expected: LinkId, actual: LinkId },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors from parsing identifier text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdParseError {
    #[error("invalid {kind}: expected {expected} hex digits, got {actual}")]
    Length {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {kind}: {message}")]
    Hex { kind: &'static str, message: String },
}

impl IdParseError {
    pub fn length(kind: &'static str, expected: usize, actual: usize) -> Self {
        Self::Length {
            kind,
            expected,
            actual,
        }
    }

    pub fn hex(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Hex {
            kind,
            message: message.into(),
        }
    }
}
