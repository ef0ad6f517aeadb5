//! TRANSFER OWNERSHIP operation - hands the system-owner role to a new identity.

use cograph_core::{Event, Identity};
use cograph_graph::Graph;
use tracing::debug;

use crate::access;
use crate::context::CallContext;
use crate::error::MutationResult;
use crate::result::{Change, MutationOutcome};
use crate::validation;

/// Replace the system owner. Only the current owner may call this.
pub fn execute_transfer_ownership(
    graph: &mut Graph,
    ctx: CallContext,
    new_owner: Identity,
) -> MutationResult<MutationOutcome> {
    access::ensure_owner(ctx.caller, graph.owner(), "transfer ownership")?;
    validation::ensure_identity(new_owner, "new owner")?;

    let previous = graph.set_owner(new_owner);
    debug!(previous = %previous, new_owner = %new_owner, "ownership transferred");

    Ok(MutationOutcome::new(
        Change::OwnerTransferred { previous },
        Event::OwnershipTransferred {
            previous_owner: previous,
            new_owner,
        },
    ))
}
