//! Configuration schema.
//!
//! Every section carries serde defaults so that a configuration file only
//! needs to mention what it changes.

use serde::{Deserialize, Serialize};

/// Default interpreter version installed by `setup`.
pub const DEFAULT_PYTHON_VERSION: &str = "3.12";

/// Shared base unit: action names and the help convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    /// Name of the action that prints help.
    pub help_action: String,

    /// Name of the action that runs the composite setup.
    pub setup_action: String,

    /// One-line description of the help action.
    pub help_description: String,

    /// One-line description of the setup action.
    pub setup_description: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            help_action: "help".to_string(),
            setup_action: "setup".to_string(),
            help_description: "print this help message".to_string(),
            setup_description: "install the python version manager and dependency manager"
                .to_string(),
        }
    }
}

/// One step of the composite setup action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStep {
    /// Step name, used in logs and error messages.
    pub name: String,

    /// Shell command to run. `${python_version}` is substituted.
    pub command: String,

    /// Optional shell command; exit 0 means the step is already done.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
}

impl SetupStep {
    pub fn new(name: &str, command: &str, check: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            check: check.map(str::to_string),
        }
    }
}

/// Python tooling unit: required executables and the setup recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonConfig {
    /// Executables that must resolve on PATH before any action runs.
    pub executables: Vec<String>,

    /// Ignore environment overrides of `executables`.
    pub lock_executables: bool,

    /// Interpreter version installed through the version manager.
    pub python_version: String,

    /// Steps of the composite setup action, run in order.
    pub steps: Vec<SetupStep>,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            executables: vec!["curl".to_string(), "git".to_string(), "python3".to_string()],
            lock_executables: false,
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            steps: default_steps(),
        }
    }
}

fn default_steps() -> Vec<SetupStep> {
    vec![
        SetupStep::new(
            "pyenv",
            "curl -fsSL https://pyenv.run | bash",
            Some("command -v pyenv || test -x \"${PYENV_ROOT:-$HOME/.pyenv}/bin/pyenv\""),
        ),
        SetupStep::new(
            "python",
            "\"${PYENV_ROOT:-$HOME/.pyenv}/bin/pyenv\" install --skip-existing ${python_version}",
            None,
        ),
        SetupStep::new(
            "poetry",
            "curl -sSL https://install.python-poetry.org | python3 -",
            Some("command -v poetry || test -x \"$HOME/.local/bin/poetry\""),
        ),
    ]
}

/// The composed, process-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub base: BaseConfig,
    pub python: PythonConfig,
}
