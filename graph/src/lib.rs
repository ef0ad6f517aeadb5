//! cograph Graph
//!
//! In-memory storage for nodes and links.
//!
//! Responsibilities:
//! - Own every node and link record
//! - Keep the outgoing/incoming adjacency views and the authorship index
//!   in step with the record tables
//! - Hold the system-owner scalar
//!
//! Storage performs structural checks only (existence, duplicates).
//! Authorization lives in `cograph-mutation`.

mod graph;
mod index;

pub use graph::{Graph, GraphStats};
pub use index::{AdjacencyIndex, AuthorshipIndex};
