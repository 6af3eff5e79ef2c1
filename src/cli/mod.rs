//! Command-line interface for pybootstrap.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Action registry, dispatcher, and action implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{Action, ActionRegistry, Command, CommandDispatcher, CommandResult};
