//! Configuration composition, loading, and validation.
//!
//! The process-wide [`BootstrapConfig`] is built once before any action is
//! dispatched and never mutated afterwards. It is composed explicitly, in
//! order, instead of by textual inclusion:
//!
//! 1. [`BaseConfig`] defaults (action names, help text)
//! 2. [`PythonConfig`] defaults (required executables, setup steps, version)
//! 3. User global config (`~/.pybootstrap/config.yml`)
//! 4. Project config (`.pybootstrap/config.yml`, or `--config <FILE>`)
//! 5. Local overrides (`.pybootstrap/config.local.yml`)
//! 6. Environment and command-line overrides ([`ConfigOverrides`])
//!
//! # Example
//!
//! ```
//! use pybootstrap::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".pybootstrap");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "python:\n  python_version: \"3.11\"\n").unwrap();
//!
//! let config = load_config(temp.path(), None, &ConfigOverrides::default()).unwrap();
//! assert_eq!(config.python.python_version, "3.11");
//! assert_eq!(config.base.help_action, "help");
//! ```

pub mod loader;
pub mod merger;
pub mod overrides;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, find_project_root_with_home, load_config, load_config_value, ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use overrides::{ConfigOverrides, EXECUTABLES_ENV_VAR};
pub use schema::{BaseConfig, BootstrapConfig, PythonConfig, SetupStep};
pub use validator::validate;
