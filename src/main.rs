//! pybootstrap CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pybootstrap::cli::{Cli, CommandDispatcher};
use pybootstrap::config::{find_project_root, load_config, ConfigOverrides};
use pybootstrap::shell::is_ci;
use pybootstrap::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries action output only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pybootstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pybootstrap=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pybootstrap starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut ui = create_ui(!is_ci(), output_mode);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_root = cli
        .project
        .clone()
        .or_else(|| find_project_root(&cwd))
        .unwrap_or(cwd);
    tracing::debug!("project root: {}", project_root.display());

    let overrides = ConfigOverrides::from_env().with_python_version(cli.python_version.clone());

    let outcome = load_config(&project_root, cli.config.as_deref(), &overrides).and_then(
        |config| {
            CommandDispatcher::new(project_root, config)
                .dry_run(cli.dry_run)
                .dispatch(&cli.actions, ui.as_mut())
        },
    );

    match outcome {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            exit_code(e.exit_code())
        }
    }
}
