//! Fail-fast executable validation.

use std::path::PathBuf;

use super::lookup::{parse_system_path, resolve_tool_path};
use crate::error::{BootstrapError, Result};

/// Resolves required executables against a fixed set of search path entries.
#[derive(Debug, Clone)]
pub struct ExecutableChecker {
    path_entries: Vec<PathBuf>,
}

impl ExecutableChecker {
    /// Checker over the current process `PATH`.
    pub fn from_env() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Checker over explicit search path entries.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// Resolve a single executable, if present.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        resolve_tool_path(name, &self.path_entries)
    }

    /// Check every name in order, stopping at the first one that is missing.
    ///
    /// Returns the resolved paths in the same order as `names`.
    pub fn check<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<PathBuf>> {
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            match self.resolve(name) {
                Some(path) => {
                    tracing::debug!("found {} at {}", name, path.display());
                    resolved.push(path);
                }
                None => {
                    tracing::debug!("{} not found in {} PATH entries", name, self.path_entries.len());
                    return Err(BootstrapError::MissingExecutable {
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(resolved)
    }
}
