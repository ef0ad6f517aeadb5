//! Argument checks shared by mutation operations.

use cograph_core::{Identity, NodeId};

use crate::error::{MutationError, MutationResult};

/// Reject the zero node id.
pub fn ensure_node_id(id: NodeId) -> MutationResult<()> {
    if id.is_zero() {
        return Err(MutationError::invalid_argument("node id must be non-zero"));
    }
    Ok(())
}

/// Reject the zero identity in the given role.
pub fn ensure_identity(who: Identity, role: &str) -> MutationResult<()> {
    if who.is_zero() {
        return Err(MutationError::invalid_argument(format!(
            "{} must be non-zero",
            role
        )));
    }
    Ok(())
}
