//! Read-only lookups against committed graph state.
//!
//! None of these require authorization. Missing nodes are reported the
//! same way mutations report them.

use cograph_core::{GraphError, Identity, Link, LinkId, Node, NodeId};
use cograph_graph::Graph;
use cograph_mutation::{MutationError, NodeRole};

use crate::error::SessionResult;

fn require_node(graph: &Graph, id: NodeId) -> SessionResult<&Node> {
    graph
        .get_node(id)
        .ok_or_else(|| MutationError::not_found(id, NodeRole::Node).into())
}

pub(crate) fn node(graph: &Graph, id: NodeId) -> SessionResult<Node> {
    require_node(graph, id).cloned()
}

pub(crate) fn link(graph: &Graph, id: LinkId) -> SessionResult<Link> {
    graph
        .get_link(id)
        .cloned()
        .ok_or_else(|| GraphError::LinkNotFound(id).into())
}

/// Every node registered by `creator`, oldest first.
pub(crate) fn nodes_of(graph: &Graph, creator: Identity) -> Vec<NodeId> {
    graph.nodes_of(creator).to_vec()
}

/// Links leaving `id` in creation order, inactive ones included.
pub(crate) fn outgoing_links(graph: &Graph, id: NodeId) -> SessionResult<Vec<Link>> {
    require_node(graph, id)?;
    Ok(graph.outgoing(id).cloned().collect())
}

/// Links arriving at `id` in creation order, inactive ones included.
pub(crate) fn incoming_links(graph: &Graph, id: NodeId) -> SessionResult<Vec<Link>> {
    require_node(graph, id)?;
    Ok(graph.incoming(id).cloned().collect())
}
