//! Action implementations.
//!
//! Each action implements the [`Command`] trait. Action names are looked up
//! in an [`ActionRegistry`] built from the base configuration and executed
//! by the [`CommandDispatcher`] in the order they were requested.

pub mod dispatcher;
pub mod help;
pub mod registry;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use registry::{Action, ActionRegistry};
