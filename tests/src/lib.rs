//! Integration test framework for cograph.
//!
//! Scenarios are scripted sequences of calls against a fresh `GraphStore`,
//! each step declaring the outcome it expects. Every step also checks the
//! journal: accepted calls must emit, rejected calls must not.

pub mod scenario;

pub mod prelude {
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::expect::Expect;
    pub use crate::fixtures::{actor, init_tracing, node, OWNER};
    pub use crate::scenario::Scenario;
    pub use cograph_core::{Event, Identity, Link, LinkId, NodeId};
    pub use cograph_session::{GraphStore, SessionError, SessionResult};
}
