//! Journal entry types.

use cograph_core::Event;
use serde::{Deserialize, Serialize};

/// Sequence number - unique, gap-free position of each journal record.
pub type Seq = u64;

/// A journaled event with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Sequence number, starting at 1.
    pub seq: Seq,
    /// The event data.
    pub event: Event,
}

impl EventRecord {
    /// Create a new record.
    pub fn new(seq: Seq, event: Event) -> Self {
        Self { seq, event }
    }
}
