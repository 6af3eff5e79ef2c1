//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// pybootstrap - install Python development dependencies.
///
/// Required executables are checked on every run, before any action.
#[derive(Debug, Parser)]
#[command(name = "pybootstrap")]
#[command(author, version, about, long_about = None)]
#[command(next_display_order = None)]
pub struct Cli {
    /// Actions to run in order (default: help)
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,

    /// Path to config file (overrides .pybootstrap/config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python version to install
    #[arg(long, env = "PYTHON_VERSION", value_name = "VERSION")]
    pub python_version: Option<String>,

    /// Print setup commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
