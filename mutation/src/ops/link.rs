//! LINK operations - create links and toggle their activation flag.

use cograph_core::{Event, GraphError, NodeId};
use cograph_graph::Graph;
use tracing::debug;

use crate::access;
use crate::context::CallContext;
use crate::error::{MutationError, MutationResult, NodeRole};
use crate::result::{Change, MutationOutcome};

/// Create a link from `from` to `to`.
///
/// Self-links and repeated (from, to, relation) triples are allowed.
pub fn execute_create_link(
    graph: &mut Graph,
    ctx: CallContext,
    from: NodeId,
    to: NodeId,
    relation: &str,
) -> MutationResult<MutationOutcome> {
    let source = graph
        .get_node(from)
        .ok_or_else(|| MutationError::not_found(from, NodeRole::Source))?;
    if !graph.contains_node(to) {
        return Err(MutationError::not_found(to, NodeRole::Target));
    }
    access::ensure_can_mutate(source, ctx.caller, graph.owner(), "link from this node")?;

    let link = graph.create_link(from, to, relation, ctx.now)?;
    debug!(link = %link, from = %from, to = %to, relation, "link created");

    Ok(MutationOutcome::new(
        Change::LinkCreated(link),
        Event::LinkCreated {
            link,
            from,
            to,
            relation: relation.to_string(),
            timestamp: ctx.now,
        },
    ))
}

/// Set the activation flag of the link at `index` in `from`'s outgoing list.
///
/// The outgoing and incoming views share one record, so the target's
/// incoming entry changes with it.
pub fn execute_set_link_active(
    graph: &mut Graph,
    ctx: CallContext,
    from: NodeId,
    index: usize,
    active: bool,
) -> MutationResult<MutationOutcome> {
    let source = graph
        .get_node(from)
        .ok_or_else(|| MutationError::not_found(from, NodeRole::Node))?;
    let link_id = graph
        .outgoing_link_at(from, index)
        .ok_or_else(|| MutationError::index_out_of_range(from, index, graph.outgoing_len(from)))?;
    access::ensure_can_mutate(source, ctx.caller, graph.owner(), "change link status")?;

    let previous = graph.set_link_active(link_id, active)?;
    let link = graph
        .get_link(link_id)
        .ok_or(GraphError::LinkNotFound(link_id))?;
    debug!(link = %link_id, from = %from, index, active, "link status updated");

    Ok(MutationOutcome::new(
        Change::LinkStatus {
            link: link_id,
            previous,
        },
        Event::LinkStatusUpdated {
            link: link_id,
            from,
            to: link.to,
            relation: link.relation.clone(),
            is_active: active,
            timestamp: ctx.now,
        },
    ))
}
