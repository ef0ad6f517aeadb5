//! Mutation operation implementations.
//!
//! Each operation validates everything it needs before its first write, so a
//! returned error always means the graph is untouched.

mod link;
mod ownership;
mod register;
mod status;

pub use link::{execute_create_link, execute_set_link_active};
pub use ownership::execute_transfer_ownership;
pub use register::execute_register;
pub use status::execute_set_node_active;
