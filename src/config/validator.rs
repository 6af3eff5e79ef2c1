//! Validation of a composed configuration.

use std::collections::HashSet;

use super::schema::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use crate::version::ReleaseVersion;

fn invalid(message: impl Into<String>) -> BootstrapError {
    BootstrapError::ConfigValidationError {
        message: message.into(),
    }
}

/// Validate a configuration, returning the first problem found.
pub fn validate(config: &BootstrapConfig) -> Result<()> {
    let base = &config.base;
    if base.help_action.trim().is_empty() || base.setup_action.trim().is_empty() {
        return Err(invalid("action names must not be empty"));
    }
    if base.help_action == base.setup_action {
        return Err(invalid(format!(
            "help and setup actions share the name '{}'",
            base.help_action
        )));
    }

    if let Some(pos) = config
        .python
        .executables
        .iter()
        .position(|name| name.trim().is_empty())
    {
        return Err(invalid(format!("executables[{}] is empty", pos)));
    }

    config
        .python
        .python_version
        .parse::<ReleaseVersion>()
        .map_err(|_| {
            invalid(format!(
                "python_version '{}' is not a MAJOR.MINOR[.PATCH] version",
                config.python.python_version
            ))
        })?;

    let mut seen = HashSet::new();
    for step in &config.python.steps {
        if step.name.trim().is_empty() {
            return Err(invalid("setup step names must not be empty"));
        }
        if step.command.trim().is_empty() {
            return Err(invalid(format!("setup step '{}' has no command", step.name)));
        }
        if !seen.insert(step.name.as_str()) {
            return Err(invalid(format!("duplicate setup step '{}'", step.name)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupStep;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&BootstrapConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_executable_name() {
        let mut config = BootstrapConfig::default();
        config.python.executables.push("  ".to_string());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("executables[3]"));
    }

    #[test]
    fn rejects_bad_python_version() {
        let mut config = BootstrapConfig::default();
        config.python.python_version = "latest".to_string();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("latest"));
    }

    #[test]
    fn rejects_duplicate_steps() {
        let mut config = BootstrapConfig::default();
        config.python.steps = vec![
            SetupStep::new("poetry", "echo one", None),
            SetupStep::new("poetry", "echo two", None),
        ];
        assert!(validate(&config)
            .unwrap_err()
            .to_string()
            .contains("duplicate setup step 'poetry'"));
    }

    #[test]
    fn rejects_step_without_command() {
        let mut config = BootstrapConfig::default();
        config.python.steps = vec![SetupStep::new("pyenv", " ", None)];
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_colliding_action_names() {
        let mut config = BootstrapConfig::default();
        config.base.setup_action = "help".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn empty_executable_list_is_valid() {
        let mut config = BootstrapConfig::default();
        config.python.executables.clear();
        assert!(validate(&config).is_ok());
    }
}
