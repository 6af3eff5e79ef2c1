//! pybootstrap - install distro-independent Python development dependencies.
//!
//! Every run first checks that the configured executables resolve on the
//! search path, then runs the requested actions: `help` prints the list of
//! actions and `setup` installs a Python version manager and a dependency
//! manager through a configurable sequence of shell steps.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, action registry, and actions
//! - [`config`] - Configuration composition, loading, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Search path probing and executable validation
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//! - [`version`] - Version parsing and update classification
//!
//! # Example
//!
//! ```
//! use pybootstrap::requirements::ExecutableChecker;
//!
//! let checker = ExecutableChecker::with_path(Vec::new());
//! let err = checker.check(&["nonexistent-tool-xyz"]).unwrap_err();
//! assert!(err.to_string().contains("nonexistent-tool-xyz"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{BootstrapError, Result};
