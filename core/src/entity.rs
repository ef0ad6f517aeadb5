//! Entity records for cograph.
//!
//! Nodes and links are the two record kinds in the graph. Both are
//! append-only: once created, only their `is_active` flag ever changes.

use serde::{Deserialize, Serialize};

use crate::{Identity, LinkId, NodeId, Timestamp};

/// A registered vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Content-addressed identifier, fixed at registration.
    pub id: NodeId,
    /// Identity that registered the node.
    pub creator: Identity,
    /// Human-readable label.
    pub label: String,
    /// Opaque reference to the content (never dereferenced).
    pub uri: String,
    /// Registration time.
    pub created_at: Timestamp,
    /// Activation flag.
    pub is_active: bool,
}

impl Node {
    /// Create a new, active node.
    pub fn new(
        id: NodeId,
        creator: Identity,
        label: impl Into<String>,
        uri: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            creator,
            label: label.into(),
            uri: uri.into(),
            created_at,
            is_active: true,
        }
    }

    /// A node with a zero creator counts as not registered.
    pub fn is_registered(&self) -> bool {
        !self.creator.is_zero()
    }

    /// Check whether `who` registered this node.
    pub fn is_created_by(&self, who: Identity) -> bool {
        self.creator == who
    }
}

/// A directed, labeled edge between two registered nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Identifier assigned at creation.
    pub id: LinkId,
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Free-text relation label, e.g. "references".
    pub relation: String,
    /// Creation time.
    pub created_at: Timestamp,
    /// Activation flag.
    pub is_active: bool,
}

impl Link {
    /// Create a new, active link.
    pub fn new(
        id: LinkId,
        from: NodeId,
        to: NodeId,
        relation: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            from,
            to,
            relation: relation.into(),
            created_at,
            is_active: true,
        }
    }
}
