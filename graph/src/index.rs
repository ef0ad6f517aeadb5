//! Indexes for adjacency and authorship lookups.
//!
//! Every index here is append-only: entries are pushed in creation order and
//! never reordered. The only removal is `pop_*`, used to undo the most recent
//! append when a transaction rolls back.

use cograph_core::{Identity, LinkId, NodeId};
use std::collections::HashMap;

/// Adjacency index: NodeId -> { outgoing: [LinkId], incoming: [LinkId] }
///
/// Both directions point into the single link table, so the outgoing copy and
/// the incoming copy of a link are the same record.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyIndex {
    /// Links where the node is the source.
    outgoing: HashMap<NodeId, Vec<LinkId>>,
    /// Links where the node is the target.
    incoming: HashMap<NodeId, Vec<LinkId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, link_id: LinkId, from: NodeId, to: NodeId) {
        self.outgoing.entry(from).or_default().push(link_id);
        self.incoming.entry(to).or_default().push(link_id);
    }

    /// Undo the most recent `insert` for this link.
    ///
    /// Returns false (and changes nothing) if the link is not the last entry
    /// on both sides.
    pub fn pop(&mut self, link_id: LinkId, from: NodeId, to: NodeId) -> bool {
        let is_last = |index: &HashMap<NodeId, Vec<LinkId>>, node: &NodeId| {
            index.get(node).and_then(|list| list.last()) == Some(&link_id)
        };
        if !is_last(&self.outgoing, &from) || !is_last(&self.incoming, &to) {
            return false;
        }

        for (index, node) in [(&mut self.outgoing, from), (&mut self.incoming, to)] {
            if let Some(list) = index.get_mut(&node) {
                list.pop();
                if list.is_empty() {
                    index.remove(&node);
                }
            }
        }
        true
    }

    /// Links leaving a node, in creation order.
    pub fn outgoing(&self, node_id: NodeId) -> &[LinkId] {
        self.outgoing
            .get(&node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Links arriving at a node, in creation order.
    pub fn incoming(&self, node_id: NodeId) -> &[LinkId] {
        self.incoming
            .get(&node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Authorship index: Identity -> [NodeId] in registration order.
#[derive(Debug, Default, Clone)]
pub struct AuthorshipIndex {
    index: HashMap<Identity, Vec<NodeId>>,
}

impl AuthorshipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, creator: Identity, node_id: NodeId) {
        self.index.entry(creator).or_default().push(node_id);
    }

    /// Undo the most recent `insert` for this creator.
    pub fn pop(&mut self, creator: Identity, node_id: NodeId) -> bool {
        match self.index.get_mut(&creator) {
            Some(list) if list.last() == Some(&node_id) => {
                list.pop();
                if list.is_empty() {
                    self.index.remove(&creator);
                }
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, creator: Identity) -> &[NodeId] {
        self.index
            .get(&creator)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct identities that registered at least one node.
    pub fn creator_count(&self) -> usize {
        self.index.len()
    }
}
