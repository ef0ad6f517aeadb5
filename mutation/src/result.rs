//! Mutation result types.

use cograph_core::{Event, Identity, LinkId, NodeId};

/// What a successful mutation changed.
///
/// Carries the prior value of anything overwritten so the change can be
/// reversed when an enclosing transaction rolls back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A node was registered.
    NodeRegistered(NodeId),
    /// A node's flag was set; `previous` is the old value.
    NodeStatus { id: NodeId, previous: bool },
    /// A link was created.
    LinkCreated(LinkId),
    /// A link's flag was set; `previous` is the old value.
    LinkStatus { link: LinkId, previous: bool },
    /// The system owner changed; `previous` is the old owner.
    OwnerTransferred { previous: Identity },
}

/// Outcome of a mutation operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// The applied change.
    pub change: Change,
    /// The notification to publish.
    pub event: Event,
}

impl MutationOutcome {
    pub fn new(change: Change, event: Event) -> Self {
        Self { change, event }
    }

    /// Get the registered node ID if this is a registration.
    pub fn registered_node(&self) -> Option<NodeId> {
        match self.change {
            Change::NodeRegistered(id) => Some(id),
            _ => None,
        }
    }

    /// Get the created link ID if this is a link creation.
    pub fn created_link(&self) -> Option<LinkId> {
        match self.change {
            Change::LinkCreated(id) => Some(id),
            _ => None,
        }
    }
}
