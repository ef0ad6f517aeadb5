//! Access control.
//!
//! One rule covers every node and link mutation: the caller must be the
//! node's creator or the system owner. Owner-only operations use
//! [`ensure_owner`].

use cograph_core::{Identity, Node};

use crate::error::{MutationError, MutationResult};

/// Check whether `caller` may mutate `node` (or the links leaving it).
///
/// The zero identity is never authorized, even if it somehow matches.
pub fn can_mutate(node: &Node, caller: Identity, owner: Identity) -> bool {
    !caller.is_zero() && (node.is_created_by(caller) || caller == owner)
}

/// Fail with `Unauthorized` unless [`can_mutate`] holds.
pub fn ensure_can_mutate(
    node: &Node,
    caller: Identity,
    owner: Identity,
    action: &'static str,
) -> MutationResult<()> {
    if can_mutate(node, caller, owner) {
        Ok(())
    } else {
        Err(MutationError::unauthorized(caller, action))
    }
}

/// Fail with `Unauthorized` unless `caller` is the system owner.
pub fn ensure_owner(caller: Identity, owner: Identity, action: &'static str) -> MutationResult<()> {
    if !caller.is_zero() && caller == owner {
        Ok(())
    } else {
        Err(MutationError::unauthorized(caller, action))
    }
}
