//! SET NODE ACTIVE operation - toggles a node's activation flag.

use cograph_core::{Event, NodeId};
use cograph_graph::Graph;
use tracing::debug;

use crate::access;
use crate::context::CallContext;
use crate::error::{MutationError, MutationResult, NodeRole};
use crate::result::{Change, MutationOutcome};

/// Set a node's activation flag. Setting the current value is allowed and
/// still produces an event.
pub fn execute_set_node_active(
    graph: &mut Graph,
    ctx: CallContext,
    id: NodeId,
    active: bool,
) -> MutationResult<MutationOutcome> {
    let node = graph
        .get_node(id)
        .ok_or_else(|| MutationError::not_found(id, NodeRole::Node))?;
    access::ensure_can_mutate(node, ctx.caller, graph.owner(), "change node status")?;

    let previous = graph.set_node_active(id, active)?;
    debug!(node = %id, active, caller = %ctx.caller, "node status updated");

    Ok(MutationOutcome::new(
        Change::NodeStatus { id, previous },
        Event::NodeStatusUpdated {
            id,
            is_active: active,
            timestamp: ctx.now,
        },
    ))
}
