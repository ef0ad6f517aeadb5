//! The shared graph store.

use std::sync::Arc;

use cograph_core::{Identity, Link, LinkId, Node, NodeId};
use cograph_graph::{Graph, GraphStats};
use cograph_journal::{recover, EventRecord, FileJournal, Journal, MemoryJournal, Seq};
use cograph_mutation::{CallContext, MutationError};
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::SessionResult;
use crate::query;
use crate::transaction::{self, Transaction};

struct Inner {
    graph: Graph,
    journal: Box<dyn Journal>,
}

/// A registry of nodes and links shared between callers.
///
/// Every mutation runs under the write lock from its first check to its
/// journal append, so calls are totally ordered and never partially
/// visible. Reads share the read lock.
pub struct GraphStore {
    inner: RwLock<Inner>,
    clock: Arc<dyn Clock>,
}

impl GraphStore {
    /// In-memory store on the wall clock.
    pub fn new(owner: Identity) -> SessionResult<Self> {
        Self::with_clock(owner, Arc::new(SystemClock))
    }

    /// In-memory store on the given clock.
    pub fn with_clock(owner: Identity, clock: Arc<dyn Clock>) -> SessionResult<Self> {
        Self::with_parts(owner, Box::new(MemoryJournal::new()), clock)
    }

    /// Build a store over an existing journal, replaying whatever it holds.
    ///
    /// `owner` must be the owner the journal was started with.
    pub fn with_parts(
        owner: Identity,
        journal: Box<dyn Journal>,
        clock: Arc<dyn Clock>,
    ) -> SessionResult<Self> {
        if owner.is_zero() {
            return Err(MutationError::invalid_argument("owner must be non-zero").into());
        }

        let mut graph = Graph::new(owner);
        if !journal.records().is_empty() {
            let stats = recover(journal.records(), &mut graph)?;
            info!(
                entries = stats.entries_replayed,
                transfers = stats.ownership_transfers,
                "store recovered from journal"
            );
        }
        info!(owner = %graph.owner(), seq = journal.last_seq(), "graph store ready");

        Ok(Self {
            inner: RwLock::new(Inner { graph, journal }),
            clock,
        })
    }

    /// Build a store from configuration, recovering a file journal if one
    /// is configured.
    pub fn open(config: &StoreConfig) -> SessionResult<Self> {
        config.validate()?;
        let journal: Box<dyn Journal> = match &config.journal.path {
            Some(path) => Box::new(FileJournal::open(path, config.journal.sync_on_append)?),
            None => Box::new(MemoryJournal::new()),
        };
        Self::with_parts(config.owner, journal, config.clock.build())
    }

    // ==================== Mutations ====================

    /// Register `id` with `caller` as its creator.
    pub fn register_node(
        &self,
        caller: Identity,
        id: NodeId,
        label: &str,
        uri: &str,
    ) -> SessionResult<()> {
        self.transaction(caller, |tx| tx.register_node(id, label, uri))
    }

    pub fn set_node_active(&self, caller: Identity, id: NodeId, active: bool) -> SessionResult<()> {
        self.transaction(caller, |tx| tx.set_node_active(id, active))
    }

    /// Link `from` to `to`, returning the new link's identifier.
    pub fn create_link(
        &self,
        caller: Identity,
        from: NodeId,
        to: NodeId,
        relation: &str,
    ) -> SessionResult<LinkId> {
        self.transaction(caller, |tx| tx.create_link(from, to, relation))
    }

    /// Set the flag of the link at `index` in `from`'s outgoing list.
    pub fn set_link_active(
        &self,
        caller: Identity,
        from: NodeId,
        index: usize,
        active: bool,
    ) -> SessionResult<()> {
        self.transaction(caller, |tx| tx.set_link_active(from, index, active))
    }

    pub fn transfer_ownership(&self, caller: Identity, new_owner: Identity) -> SessionResult<()> {
        self.transaction(caller, |tx| tx.transfer_ownership(new_owner))
    }

    /// Run `f` as one atomic unit on behalf of `caller`.
    ///
    /// All operations share one timestamp. If `f` returns an error, every
    /// change it made is undone and nothing is journaled.
    pub fn transaction<R, F>(&self, caller: Identity, f: F) -> SessionResult<R>
    where
        F: FnOnce(&mut Transaction<'_>) -> SessionResult<R>,
    {
        let mut guard = self.inner.write();
        let Inner { graph, journal } = &mut *guard;
        let ctx = CallContext::new(caller, self.clock.now());

        let mut tx = Transaction::new(&mut *graph, ctx);
        let result = f(&mut tx);
        let applied = tx.into_applied();

        match result {
            Ok(value) => {
                transaction::commit(graph, &mut **journal, &applied)?;
                Ok(value)
            }
            Err(e) => {
                warn!(caller = %caller, error = %e, "mutation rejected");
                transaction::rollback(graph, &applied);
                Err(e)
            }
        }
    }

    // ==================== Reads ====================

    pub fn owner(&self) -> Identity {
        self.inner.read().graph.owner()
    }

    pub fn node(&self, id: NodeId) -> SessionResult<Node> {
        query::node(&self.inner.read().graph, id)
    }

    pub fn link(&self, id: LinkId) -> SessionResult<Link> {
        query::link(&self.inner.read().graph, id)
    }

    /// Nodes registered by `creator`, in registration order.
    pub fn nodes_of(&self, creator: Identity) -> Vec<NodeId> {
        query::nodes_of(&self.inner.read().graph, creator)
    }

    pub fn outgoing_links(&self, id: NodeId) -> SessionResult<Vec<Link>> {
        query::outgoing_links(&self.inner.read().graph, id)
    }

    pub fn incoming_links(&self, id: NodeId) -> SessionResult<Vec<Link>> {
        query::incoming_links(&self.inner.read().graph, id)
    }

    pub fn stats(&self) -> GraphStats {
        self.inner.read().graph.stats()
    }

    /// Journaled events after `seq`, oldest first.
    pub fn events_since(&self, seq: Seq) -> Vec<EventRecord> {
        self.inner.read().journal.since(seq).to_vec()
    }

    pub fn last_seq(&self) -> Seq {
        self.inner.read().journal.last_seq()
    }

    /// Run `f` against a consistent snapshot of committed state.
    pub fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&self.inner.read().graph)
    }

    /// Flush the journal to durable storage.
    pub fn sync(&self) -> SessionResult<()> {
        self.inner.write().journal.sync()?;
        Ok(())
    }
}
