//! Action dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing actions
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for running requested actions in order

use std::path::{Path, PathBuf};

use super::help::HelpCommand;
use super::registry::{Action, ActionRegistry};
use super::setup::SetupCommand;
use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::requirements::ExecutableChecker;
use crate::ui::UserInterface;

/// Trait for action implementations.
pub trait Command {
    /// Execute the action.
    ///
    /// Failures are returned as errors; `main` turns them into the
    /// process exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Validates required executables and runs requested actions.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config: BootstrapConfig,
    registry: ActionRegistry,
    checker: ExecutableChecker,
    dry_run: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher that resolves executables on the process `PATH`.
    pub fn new(project_root: PathBuf, config: BootstrapConfig) -> Self {
        Self::with_checker(project_root, config, ExecutableChecker::from_env())
    }

    /// Create a dispatcher with an explicit executable checker.
    pub fn with_checker(
        project_root: PathBuf,
        config: BootstrapConfig,
        checker: ExecutableChecker,
    ) -> Self {
        let registry = ActionRegistry::from_base(&config.base);
        Self {
            project_root,
            config,
            registry,
            checker,
            dry_run: false,
        }
    }

    /// Print setup commands instead of running them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Check every required executable, then run `actions` in order.
    ///
    /// The executable check always runs first, whichever actions were
    /// requested; nothing is dispatched if it fails. The first failing
    /// action stops the run with its error.
    pub fn dispatch<S: AsRef<str>>(
        &self,
        actions: &[S],
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        self.checker.check(&self.config.python.executables)?;

        let resolved = self.registry.resolve(actions)?;
        for action in resolved {
            tracing::debug!("dispatching {:?}", action);
            match action {
                Action::Help => HelpCommand::new(&self.registry).execute(ui)?,
                Action::Setup => SetupCommand::new(
                    &self.project_root,
                    &self.config.python,
                    &self.checker,
                )
                .dry_run(self.dry_run)
                .execute(ui)?,
            };
        }
        Ok(CommandResult::success())
    }
}
