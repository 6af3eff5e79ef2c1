//! Environment and command-line overrides.
//!
//! Overrides are the last composition layer. The executable list override
//! honours `lock_executables`; the Python version override always applies.

use super::schema::BootstrapConfig;

/// Comma separated replacement for `python.executables`.
pub const EXECUTABLES_ENV_VAR: &str = "PYBOOTSTRAP_EXECUTABLES";

/// Values that replace the file-based configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub executables: Option<Vec<String>>,
    pub python_version: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Read overrides with a custom env var lookup function.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let executables = env_fn(EXECUTABLES_ENV_VAR).ok().map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        });

        Self {
            executables,
            python_version: None,
        }
    }

    /// Replace the Python version, e.g. from `--python-version`.
    pub fn with_python_version(mut self, version: Option<String>) -> Self {
        if version.is_some() {
            self.python_version = version;
        }
        self
    }

    /// Apply the overrides to a composed configuration.
    pub fn apply(&self, config: &mut BootstrapConfig) {
        if let Some(executables) = &self.executables {
            if config.python.lock_executables {
                tracing::warn!(
                    "{} ignored: executables are locked by configuration",
                    EXECUTABLES_ENV_VAR
                );
            } else {
                tracing::debug!("executables overridden from environment: {:?}", executables);
                config.python.executables = executables.clone();
            }
        }

        if let Some(version) = &self.python_version {
            tracing::debug!("python version overridden: {}", version);
            config.python.python_version = version.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    fn env_with(value: &'static str) -> impl Fn(&str) -> Result<String, VarError> {
        move |key: &str| {
            if key == EXECUTABLES_ENV_VAR {
                Ok(value.to_string())
            } else {
                Err(VarError::NotPresent)
            }
        }
    }

    #[test]
    fn parses_comma_separated_list() {
        let overrides = ConfigOverrides::from_env_with(env_with("python3, git ,,make"));
        assert_eq!(
            overrides.executables,
            Some(vec!["python3".to_string(), "git".to_string(), "make".to_string()])
        );
    }

    #[test]
    fn absent_variable_means_no_override() {
        let overrides = ConfigOverrides::from_env_with(|_: &str| Err(VarError::NotPresent));
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn replaces_executables_when_unlocked() {
        let mut config = BootstrapConfig::default();
        ConfigOverrides::from_env_with(env_with("git")).apply(&mut config);
        assert_eq!(config.python.executables, vec!["git".to_string()]);
    }

    #[test]
    fn locked_executables_ignore_override() {
        let mut config = BootstrapConfig::default();
        config.python.lock_executables = true;
        let before = config.python.executables.clone();

        ConfigOverrides::from_env_with(env_with("git")).apply(&mut config);
        assert_eq!(config.python.executables, before);
    }

    #[test]
    fn python_version_always_applies() {
        let mut config = BootstrapConfig::default();
        config.python.lock_executables = true;

        ConfigOverrides::default()
            .with_python_version(Some("3.9".to_string()))
            .apply(&mut config);
        assert_eq!(config.python.python_version, "3.9");
    }

    #[test]
    fn with_python_version_none_keeps_existing() {
        let overrides = ConfigOverrides {
            python_version: Some("3.10".to_string()),
            ..Default::default()
        }
        .with_python_version(None);
        assert_eq!(overrides.python_version.as_deref(), Some("3.10"));
    }
}
