//! Per-call environment.

use cograph_core::{Identity, Timestamp};

/// The authenticated caller and the time of the call.
///
/// Supplied by whatever layer invokes the executor; the executor never reads
/// identity or time from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Identity,
    pub now: Timestamp,
}

impl CallContext {
    pub fn new(caller: Identity, now: Timestamp) -> Self {
        Self { caller, now }
    }
}
