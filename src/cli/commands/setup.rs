//! The `setup` action.
//!
//! Setup is a composite action: it runs the configured steps in order and
//! stops at the first failure, handing that step's exit code back
//! unchanged. Steps whose `check` command succeeds are skipped, so running
//! setup twice is safe.

use std::path::Path;

use super::dispatcher::{Command, CommandResult};
use crate::config::{PythonConfig, SetupStep};
use crate::error::{BootstrapError, Result};
use crate::requirements::ExecutableChecker;
use crate::shell::{execute, execute_check, execute_program, CommandOptions};
use crate::ui::UserInterface;
use crate::version::{update_types, ReleaseVersion, UpdateType};

/// Placeholder replaced with the effective Python version.
pub const PYTHON_VERSION_PLACEHOLDER: &str = "${python_version}";

/// Substitute the Python version into a step command.
pub fn interpolate(command: &str, python_version: &str) -> String {
    command.replace(PYTHON_VERSION_PLACEHOLDER, python_version)
}

/// Runs the composite setup action.
pub struct SetupCommand<'a> {
    project_root: &'a Path,
    python: &'a PythonConfig,
    checker: &'a ExecutableChecker,
    dry_run: bool,
}

impl<'a> SetupCommand<'a> {
    pub fn new(
        project_root: &'a Path,
        python: &'a PythonConfig,
        checker: &'a ExecutableChecker,
    ) -> Self {
        Self {
            project_root,
            python,
            checker,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn options(&self) -> CommandOptions {
        let mut options = CommandOptions {
            cwd: Some(self.project_root.to_path_buf()),
            ..Default::default()
        };
        options.env.insert(
            "PYTHON_VERSION".to_string(),
            self.python.python_version.clone(),
        );
        options
    }

    /// Version of the first `python3` on the search path, if any.
    fn installed_python(&self) -> Option<ReleaseVersion> {
        let python = self.checker.resolve("python3")?;
        let output = execute_program(&python, &["--version"]).ok()?;
        let version = ReleaseVersion::find_in(&format!("{} {}", output.stdout, output.stderr));
        if version.is_none() {
            tracing::debug!("could not read a version from {}", python.display());
        }
        version
    }

    /// Log how the installed interpreter relates to the requested version.
    fn report_interpreter(&self) {
        let Ok(wanted) = self.python.python_version.parse::<ReleaseVersion>() else {
            return;
        };
        let Some(installed) = self.installed_python() else {
            return;
        };

        match UpdateType::greatest(&update_types(&installed, &wanted)) {
            Some(kind) => tracing::info!(
                "python3 {} found on PATH; setup targets {} ({} update)",
                installed,
                wanted,
                kind
            ),
            None => tracing::info!("python3 {} found on PATH matches {}", installed, wanted),
        }
    }

    fn run_step(
        &self,
        index: usize,
        total: usize,
        step: &SetupStep,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let version = &self.python.python_version;
        let command = interpolate(&step.command, version);
        ui.show_step(index + 1, total, &step.name, &command);

        if self.dry_run {
            ui.message(&format!("  would run: {}", command));
            return Ok(());
        }

        if let Some(check) = &step.check {
            if execute_check(&interpolate(check, version), &self.options()) {
                tracing::debug!("check for {} passed", step.name);
                ui.message(&format!("  {} already installed, skipping", step.name));
                return Ok(());
            }
        }

        let result = execute(&command, &self.options())?;
        if result.success {
            return Ok(());
        }

        tracing::debug!("{} failed with {:?}", step.name, result.exit_code);
        Err(BootstrapError::DelegatedActionFailure {
            step: step.name.clone(),
            command,
            code: result.exit_code,
        })
    }
}

impl Command for SetupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!(
            "Setting up Python {} tooling",
            self.python.python_version
        ));
        if self.dry_run {
            ui.message("Running in dry-run mode; no commands will be executed.");
        } else {
            self.report_interpreter();
        }

        let total = self.python.steps.len();
        for (index, step) in self.python.steps.iter().enumerate() {
            self.run_step(index, total, step, ui)?;
        }

        ui.success("Setup complete!");
        Ok(CommandResult::success())
    }
}
