//! cograph Session
//!
//! The public face of the registry: a `GraphStore` that callers share.
//!
//! Responsibilities:
//! - Serialize every mutation behind one lock so each call is atomic
//! - Stamp calls with the environment clock and the explicit caller
//! - Journal the event of every accepted mutation, rolling back if the
//!   journal refuses it
//! - Run multi-operation transactions with all-or-nothing semantics
//! - Serve read queries from committed state only

mod clock;
mod config;
mod error;
mod query;
mod store;
mod transaction;

pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use config::{ClockConfig, JournalConfig, StoreConfig};
pub use error::{SessionError, SessionResult};
pub use store::GraphStore;
pub use transaction::Transaction;
