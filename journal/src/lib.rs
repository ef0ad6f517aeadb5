//! cograph Journal
//!
//! Append-only event log and state recovery.
//!
//! Responsibilities:
//! - Number and retain every notification emitted by committed mutations
//! - Persist notifications as JSON lines when file-backed
//! - Serve observers reading events after a known sequence number
//! - Replay the log into an empty graph to rebuild state

mod entry;
mod error;
mod journal;
mod recovery;

pub use entry::{EventRecord, Seq};
pub use error::{JournalError, JournalResult};
pub use journal::{FileJournal, Journal, MemoryJournal};
pub use recovery::{recover, RecoveryStats};
