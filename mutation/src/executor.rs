//! Mutation executor - coordinates mutation operations.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/register.rs` - node registration
//! - `ops/status.rs` - node activation flag
//! - `ops/link.rs` - link creation and link activation flag
//! - `ops/ownership.rs` - system-owner transfer

use cograph_core::{Identity, NodeId};
use cograph_graph::Graph;

use crate::context::CallContext;
use crate::error::MutationResult;
use crate::ops;
use crate::result::MutationOutcome;

/// Mutation executor.
pub struct MutationExecutor<'g> {
    graph: &'g mut Graph,
    ctx: CallContext,
}

impl<'g> MutationExecutor<'g> {
    /// Create a new executor acting for `ctx.caller` at `ctx.now`.
    pub fn new(graph: &'g mut Graph, ctx: CallContext) -> Self {
        Self { graph, ctx }
    }

    /// Register a node.
    pub fn register_node(
        &mut self,
        id: NodeId,
        label: &str,
        uri: &str,
    ) -> MutationResult<MutationOutcome> {
        ops::execute_register(self.graph, self.ctx, id, label, uri)
    }

    /// Set a node's activation flag.
    pub fn set_node_active(&mut self, id: NodeId, active: bool) -> MutationResult<MutationOutcome> {
        ops::execute_set_node_active(self.graph, self.ctx, id, active)
    }

    /// Create a link.
    pub fn create_link(
        &mut self,
        from: NodeId,
        to: NodeId,
        relation: &str,
    ) -> MutationResult<MutationOutcome> {
        ops::execute_create_link(self.graph, self.ctx, from, to, relation)
    }

    /// Set the activation flag of `from`'s outgoing link at `index`.
    pub fn set_link_active(
        &mut self,
        from: NodeId,
        index: usize,
        active: bool,
    ) -> MutationResult<MutationOutcome> {
        ops::execute_set_link_active(self.graph, self.ctx, from, index, active)
    }

    /// Transfer the system-owner role.
    pub fn transfer_ownership(&mut self, new_owner: Identity) -> MutationResult<MutationOutcome> {
        ops::execute_transfer_ownership(self.graph, self.ctx, new_owner)
    }
}
