//! REGISTER operation - creates a node owned by the caller.

use cograph_core::{Event, Node, NodeId};
use cograph_graph::Graph;
use tracing::debug;

use crate::context::CallContext;
use crate::error::{MutationError, MutationResult};
use crate::result::{Change, MutationOutcome};
use crate::validation;

/// Register a new node with the caller as creator.
pub fn execute_register(
    graph: &mut Graph,
    ctx: CallContext,
    id: NodeId,
    label: &str,
    uri: &str,
) -> MutationResult<MutationOutcome> {
    validation::ensure_node_id(id)?;
    validation::ensure_identity(ctx.caller, "creator")?;

    if graph.contains_node(id) {
        return Err(MutationError::DuplicateId(id));
    }

    graph.insert_node(Node::new(id, ctx.caller, label, uri, ctx.now))?;
    debug!(node = %id, creator = %ctx.caller, "registered node");

    Ok(MutationOutcome::new(
        Change::NodeRegistered(id),
        Event::NodeRegistered {
            id,
            creator: ctx.caller,
            label: label.to_string(),
            uri: uri.to_string(),
            timestamp: ctx.now,
        },
    ))
}
