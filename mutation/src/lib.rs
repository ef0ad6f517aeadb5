//! cograph Mutation
//!
//! Execute write operations (REGISTER / SET NODE ACTIVE / LINK /
//! SET LINK ACTIVE / TRANSFER OWNERSHIP).
//!
//! Responsibilities:
//! - Check existence and argument preconditions
//! - Gate every mutation through the creator-or-owner rule
//! - Apply the change to the graph only after every check has passed
//! - Return the emitted event and enough detail to undo the change
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that coordinates operations
//! - `ops/` - Individual operation implementations
//! - `access` - The authorization predicate shared by all operations
//! - `validation` - Argument checks (zero sentinels)
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

pub mod access;
mod context;
mod error;
mod executor;
mod ops;
mod result;
mod validation;

pub use context::CallContext;
pub use error::{MutationError, MutationResult, NodeRole};
pub use executor::MutationExecutor;
pub use result::{Change, MutationOutcome};
