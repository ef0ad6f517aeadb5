//! Core graph storage implementation.

use crate::index::{AdjacencyIndex, AuthorshipIndex};
use cograph_core::{GraphError, GraphResult, Identity, Link, LinkId, Node, NodeId, Timestamp};
use serde::Serialize;
use std::collections::HashMap;

/// The in-memory graph storage.
///
/// Links are held once in a dense table indexed by `LinkId`; the outgoing
/// and incoming lists of each node are views onto that table, so a flag
/// change on a link is visible from both endpoints at once.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Node storage
    nodes: HashMap<NodeId, Node>,
    /// Link storage, position == LinkId
    links: Vec<Link>,
    /// Adjacency index
    adj_index: AdjacencyIndex,
    /// Authorship index
    authorship: AuthorshipIndex,
    /// Current system owner
    owner: Identity,
}

impl Graph {
    /// Create a new empty graph owned by `owner`.
    pub fn new(owner: Identity) -> Self {
        Self {
            nodes: HashMap::new(),
            links: Vec::new(),
            adj_index: AdjacencyIndex::new(),
            authorship: AuthorshipIndex::new(),
            owner,
        }
    }

    // ==================== Owner ====================

    /// Get the system owner.
    pub fn owner(&self) -> Identity {
        self.owner
    }

    /// Replace the system owner, returning the previous one.
    pub fn set_owner(&mut self, owner: Identity) -> Identity {
        std::mem::replace(&mut self.owner, owner)
    }

    // ==================== Node Operations ====================

    /// Store a new node and append it to its creator's authorship list.
    pub fn insert_node(&mut self, node: Node) -> GraphResult<()> {
        if !node.is_registered() {
            return Err(GraphError::MissingCreator(node.id));
        }
        if self.contains_node(node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }

        self.authorship.insert(node.creator, node.id);
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Remove the most recently registered node of its creator.
    ///
    /// Only used to roll back an uncommitted registration; the node must
    /// have no links.
    pub fn retract_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let node = self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        let linked = !self.adj_index.outgoing(id).is_empty() || !self.adj_index.incoming(id).is_empty();
        if linked || !self.authorship.pop(node.creator, id) {
            return Err(GraphError::NodeNotFound(id));
        }
        self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check whether a node is registered.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Set a node's activation flag, returning the previous value.
    pub fn set_node_active(&mut self, id: NodeId, active: bool) -> GraphResult<bool> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(GraphError::NodeNotFound(id))?;
        Ok(std::mem::replace(&mut node.is_active, active))
    }

    /// Node ids registered by `creator`, in registration order.
    pub fn nodes_of(&self, creator: Identity) -> &[NodeId] {
        self.authorship.get(creator)
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ==================== Link Operations ====================

    /// The id the next created link will receive.
    pub fn next_link_id(&self) -> LinkId {
        LinkId::new(self.links.len() as u64)
    }

    /// Create a new active link between two registered nodes.
    pub fn create_link(
        &mut self,
        from: NodeId,
        to: NodeId,
        relation: impl Into<String>,
        created_at: Timestamp,
    ) -> GraphResult<LinkId> {
        let id = self.next_link_id();
        self.insert_link(Link::new(id, from, to, relation, created_at))?;
        Ok(id)
    }

    /// Store a fully-formed link record, e.g. during replay.
    ///
    /// The record's id must be the next one in sequence.
    pub fn insert_link(&mut self, link: Link) -> GraphResult<()> {
        for endpoint in [link.from, link.to] {
            if !self.contains_node(endpoint) {
                return Err(GraphError::NodeNotFound(endpoint));
            }
        }
        let expected = self.next_link_id();
        if link.id != expected {
            return Err(GraphError::LinkOutOfSequence {
                expected,
                actual: link.id,
            });
        }

        self.adj_index.insert(link.id, link.from, link.to);
        self.links.push(link);
        Ok(())
    }

    /// Remove the most recently created link.
    ///
    /// Only used to roll back an uncommitted link creation.
    pub fn retract_link(&mut self, id: LinkId) -> GraphResult<Link> {
        match self.links.last() {
            Some(link) if link.id == id => {
                if !self.adj_index.pop(link.id, link.from, link.to) {
                    return Err(GraphError::LinkNotFound(id));
                }
                self.links.pop().ok_or(GraphError::LinkNotFound(id))
            }
            _ => Err(GraphError::LinkNotFound(id)),
        }
    }

    /// Get a link by ID.
    pub fn get_link(&self, id: LinkId) -> Option<&Link> {
        usize::try_from(id.raw())
            .ok()
            .and_then(|pos| self.links.get(pos))
    }

    /// Set a link's activation flag, returning the previous value.
    pub fn set_link_active(&mut self, id: LinkId, active: bool) -> GraphResult<bool> {
        let link = usize::try_from(id.raw())
            .ok()
            .and_then(|pos| self.links.get_mut(pos))
            .ok_or(GraphError::LinkNotFound(id))?;
        Ok(std::mem::replace(&mut link.is_active, active))
    }

    /// Id of the link at `index` in a node's outgoing list.
    pub fn outgoing_link_at(&self, node_id: NodeId, index: usize) -> Option<LinkId> {
        self.adj_index.outgoing(node_id).get(index).copied()
    }

    /// Number of links leaving a node.
    pub fn outgoing_len(&self, node_id: NodeId) -> usize {
        self.adj_index.outgoing(node_id).len()
    }

    /// Links leaving a node, in creation order.
    pub fn outgoing(&self, node_id: NodeId) -> impl Iterator<Item = &Link> + '_ {
        self.resolve(self.adj_index.outgoing(node_id))
    }

    /// Links arriving at a node, in creation order.
    pub fn incoming(&self, node_id: NodeId) -> impl Iterator<Item = &Link> + '_ {
        self.resolve(self.adj_index.incoming(node_id))
    }

    /// Iterate over all links in creation order.
    pub fn links(&self) -> impl Iterator<Item = &Link> + '_ {
        self.links.iter()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn resolve<'a>(&'a self, ids: &'a [LinkId]) -> impl Iterator<Item = &'a Link> + 'a {
        ids.iter().filter_map(move |id| self.get_link(*id))
    }

    // ==================== Statistics ====================

    /// Summary counts over the whole graph.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            active_nodes: self.nodes.values().filter(|n| n.is_active).count(),
            links: self.links.len(),
            active_links: self.links.iter().filter(|l| l.is_active).count(),
            creators: self.authorship.creator_count(),
        }
    }
}

/// Summary counts over a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub active_nodes: usize,
    pub links: usize,
    pub active_links: usize,
    pub creators: usize,
}
