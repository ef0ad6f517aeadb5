//! Mutation error types.

use cograph_core::{GraphError, Identity, NodeId};
use std::fmt;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Which node a `NotFound` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// The node an operation targets directly.
    Node,
    /// The source end of a link.
    Source,
    /// The target end of a link.
    Target,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Node => write!(f, "node"),
            NodeRole::Source => write!(f, "source node"),
            NodeRole::Target => write!(f, "target node"),
        }
    }
}

/// Errors that can occur during mutation execution.
///
/// Every error aborts the whole operation; nothing has been written when one
/// is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Node already registered: {0}")]
    DuplicateId(NodeId),

    #[error("{role} not found: {id}")]
    NotFound { id: NodeId, role: NodeRole },

    #[error("Unauthorized: {caller} may not {action}")]
    Unauthorized {
        caller: Identity,
        action: &'static str,
    },

    #[error("Link index {index} out of range for {id} ({len} outgoing links)")]
    IndexOutOfRange { id: NodeId, index: usize, len: usize },

    #[error("Storage error: {0}")]
    Graph(#[from] GraphError),
}

impl MutationError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(id: NodeId, role: NodeRole) -> Self {
        Self::NotFound { id, role }
    }

    pub fn unauthorized(caller: Identity, action: &'static str) -> Self {
        Self::Unauthorized { caller, action }
    }

    pub fn index_out_of_range(id: NodeId, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { id, index, len }
    }

    /// Returns true for the not-found family, regardless of which side.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Graph(GraphError::NodeNotFound(_))
        )
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
