//! Notifications emitted on successful state changes.
//!
//! Events are the only observability channel of the store: each accepted
//! mutation produces exactly one, failed mutations produce none. They carry
//! enough data to rebuild the store by replay.

use serde::{Deserialize, Serialize};

use crate::{Identity, LinkId, NodeId, Timestamp};

/// A state-change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A node was registered.
    NodeRegistered {
        id: NodeId,
        creator: Identity,
        label: String,
        uri: String,
        timestamp: Timestamp,
    },

    /// A node's activation flag was set.
    NodeStatusUpdated {
        id: NodeId,
        is_active: bool,
        timestamp: Timestamp,
    },

    /// A link was created.
    LinkCreated {
        link: LinkId,
        from: NodeId,
        to: NodeId,
        relation: String,
        timestamp: Timestamp,
    },

    /// A link's activation flag was set.
    LinkStatusUpdated {
        link: LinkId,
        from: NodeId,
        to: NodeId,
        relation: String,
        is_active: bool,
        timestamp: Timestamp,
    },

    /// The system owner changed.
    OwnershipTransferred {
        previous_owner: Identity,
        new_owner: Identity,
    },
}

impl Event {
    /// Short name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::NodeRegistered { .. } => "NodeRegistered",
            Event::NodeStatusUpdated { .. } => "NodeStatusUpdated",
            Event::LinkCreated { .. } => "LinkCreated",
            Event::LinkStatusUpdated { .. } => "LinkStatusUpdated",
            Event::OwnershipTransferred { .. } => "OwnershipTransferred",
        }
    }

    /// The node the event is about (the source node for link events).
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Event::NodeRegistered { id, .. } | Event::NodeStatusUpdated { id, .. } => Some(*id),
            Event::LinkCreated { from, .. } | Event::LinkStatusUpdated { from, .. } => Some(*from),
            Event::OwnershipTransferred { .. } => None,
        }
    }

    /// The timestamp carried by the event, if any.
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            Event::NodeRegistered { timestamp, .. }
            | Event::NodeStatusUpdated { timestamp, .. }
            | Event::LinkCreated { timestamp, .. }
            | Event::LinkStatusUpdated { timestamp, .. } => Some(*timestamp),
            Event::OwnershipTransferred { .. } => None,
        }
    }
}
