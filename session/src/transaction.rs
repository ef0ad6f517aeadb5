//! Multi-operation transactions with all-or-nothing semantics.
//!
//! A `Transaction` applies mutations to the live graph while the store's
//! write lock is held, remembering each `Change`. Commit journals every
//! event in order; rollback walks the changes backwards and undoes them.
//! A transaction dropped before its changes are handed over (a panic in
//! the caller's closure) rolls itself back.

use cograph_core::{Event, GraphResult, Identity, LinkId, NodeId};
use cograph_graph::Graph;
use cograph_journal::{Journal, Seq};
use cograph_mutation::{CallContext, Change, MutationExecutor, MutationOutcome, MutationResult};
use tracing::{debug, error, info, warn};

use crate::error::SessionResult;

/// A unit of work against the graph, executed by one caller.
pub struct Transaction<'a> {
    graph: &'a mut Graph,
    ctx: CallContext,
    applied: Vec<MutationOutcome>,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(graph: &'a mut Graph, ctx: CallContext) -> Self {
        Self {
            graph,
            ctx,
            applied: Vec::new(),
        }
    }

    /// State including this transaction's uncommitted writes.
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    /// Events applied so far, in order.
    pub fn pending_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.applied.iter().map(|o| &o.event)
    }

    pub fn register_node(&mut self, id: NodeId, label: &str, uri: &str) -> SessionResult<()> {
        self.apply(|exec| exec.register_node(id, label, uri))?;
        Ok(())
    }

    pub fn set_node_active(&mut self, id: NodeId, active: bool) -> SessionResult<()> {
        self.apply(|exec| exec.set_node_active(id, active))?;
        Ok(())
    }

    /// Create a link, returning its identifier.
    pub fn create_link(&mut self, from: NodeId, to: NodeId, relation: &str) -> SessionResult<LinkId> {
        let link = self.graph.next_link_id();
        self.apply(|exec| exec.create_link(from, to, relation))?;
        Ok(link)
    }

    pub fn set_link_active(&mut self, from: NodeId, index: usize, active: bool) -> SessionResult<()> {
        self.apply(|exec| exec.set_link_active(from, index, active))?;
        Ok(())
    }

    pub fn transfer_ownership(&mut self, new_owner: Identity) -> SessionResult<()> {
        self.apply(|exec| exec.transfer_ownership(new_owner))?;
        Ok(())
    }

    fn apply<F>(&mut self, op: F) -> SessionResult<MutationOutcome>
    where
        F: FnOnce(&mut MutationExecutor<'_>) -> MutationResult<MutationOutcome>,
    {
        let mut exec = MutationExecutor::new(&mut *self.graph, self.ctx);
        let outcome = op(&mut exec)?;
        self.applied.push(outcome.clone());
        Ok(outcome)
    }

    pub(crate) fn into_applied(mut self) -> Vec<MutationOutcome> {
        std::mem::take(&mut self.applied)
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.applied.is_empty() {
            warn!(changes = self.applied.len(), "transaction abandoned");
            rollback(&mut *self.graph, &self.applied);
        }
    }
}

/// Journal the events of `applied`, undoing them if the journal refuses.
pub(crate) fn commit(
    graph: &mut Graph,
    journal: &mut dyn Journal,
    applied: &[MutationOutcome],
) -> SessionResult<Seq> {
    if applied.is_empty() {
        return Ok(journal.last_seq());
    }

    let events: Vec<Event> = applied.iter().map(|o| o.event.clone()).collect();
    let seq = match journal.append(&events) {
        Ok(seq) => seq,
        Err(e) => {
            error!(error = %e, events = events.len(), "journal append failed");
            rollback(graph, applied);
            return Err(e.into());
        }
    };

    for event in &events {
        if let Event::OwnershipTransferred {
            previous_owner,
            new_owner,
        } = event
        {
            info!(previous = %previous_owner, new_owner = %new_owner, "system owner changed");
        }
    }
    debug!(seq, events = events.len(), "committed");
    Ok(seq)
}

/// Undo `applied` newest first.
pub(crate) fn rollback(graph: &mut Graph, applied: &[MutationOutcome]) {
    if applied.is_empty() {
        return;
    }
    for outcome in applied.iter().rev() {
        if let Err(e) = undo(graph, &outcome.change) {
            error!(error = %e, change = ?outcome.change, "failed to undo change");
        }
    }
    info!(changes = applied.len(), "transaction rolled back");
}

fn undo(graph: &mut Graph, change: &Change) -> GraphResult<()> {
    match *change {
        Change::NodeRegistered(id) => graph.retract_node(id).map(drop),
        Change::NodeStatus { id, previous } => graph.set_node_active(id, previous).map(drop),
        Change::LinkCreated(link) => graph.retract_link(link).map(drop),
        Change::LinkStatus { link, previous } => graph.set_link_active(link, previous).map(drop),
        Change::OwnerTransferred { previous } => {
            graph.set_owner(previous);
            Ok(())
        }
    }
}
