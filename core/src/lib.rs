//! cograph Core Types
//!
//! This crate provides the foundational types used throughout cograph:
//! - Identity types (NodeId, Identity, LinkId, Timestamp)
//! - Entity records (Node, Link)
//! - Notifications emitted on state change (Event)
//! - Common error types

mod entity;
mod error;
mod event;
mod id;

pub use entity::*;
pub use error::*;
pub use event::*;
pub use id::*;
