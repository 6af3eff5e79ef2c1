//! Shell command execution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::platform::posix_shell;
use crate::error::{BootstrapError, Result};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Execute a command through the POSIX shell and wait for it.
///
/// A non-zero exit is not an error here; callers inspect
/// [`CommandResult::exit_code`]. Only a failure to spawn is an error.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let (shell, flag) = posix_shell();

    let mut cmd = Command::new(shell);
    cmd.arg(flag).arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    cmd.envs(&options.env);

    cmd.stdin(Stdio::inherit());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    tracing::debug!("running `{}`", command);
    collect(cmd, command, start)
}

/// Execute a command silently and report only success/failure.
///
/// The working directory and environment of `options` still apply; its
/// capture flags are ignored and output is always discarded.
pub fn execute_check(command: &str, options: &CommandOptions) -> bool {
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
        ..options.clone()
    };
    execute(command, &options)
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Run `program` directly with `args`, capturing its output.
///
/// No shell is involved, so the program path and arguments are passed
/// through verbatim whatever characters they contain.
pub fn execute_program(program: &Path, args: &[&str]) -> Result<CommandResult> {
    let start = Instant::now();
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let label = program.display().to_string();
    tracing::debug!("running {} {:?}", label, args);
    collect(cmd, &label, start)
}

fn collect(mut cmd: Command, label: &str, start: Instant) -> Result<CommandResult> {
    let output = cmd.output().map_err(|e| {
        tracing::debug!("failed to spawn `{}`: {}", label, e);
        BootstrapError::Io(e)
    })?;

    let result = CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration: start.elapsed(),
        success: output.status.success(),
    };
    tracing::debug!(
        "`{}` exited with {:?} after {:?}",
        label,
        result.exit_code,
        result.duration
    );
    Ok(result)
}
