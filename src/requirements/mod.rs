//! Required executable detection.
//!
//! Every run starts by confirming that the configured executables resolve
//! on the search path. A single missing executable aborts the run before
//! any action is dispatched.
//!
//! # Modules
//!
//! - [`lookup`] - Search path parsing and executable resolution
//! - [`checker`] - Fail-fast validation of a requirement list

pub mod checker;
pub mod lookup;

pub use checker::ExecutableChecker;
pub use lookup::{is_executable, parse_system_path, resolve_tool_path};
