//! Mapping from action names to actions.

use crate::config::BaseConfig;
use crate::error::{BootstrapError, Result};

/// The behaviors an action name can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the fixed help text.
    Help,
    /// Run the composite setup action.
    Setup,
}

/// Ordered name → action mapping.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    entries: Vec<(String, Action, String)>,
}

impl ActionRegistry {
    /// Register the help and setup actions under the configured names.
    pub fn from_base(base: &BaseConfig) -> Self {
        Self {
            entries: vec![
                (
                    base.help_action.clone(),
                    Action::Help,
                    base.help_description.clone(),
                ),
                (
                    base.setup_action.clone(),
                    Action::Setup,
                    base.setup_description.clone(),
                ),
            ],
        }
    }

    /// Action run when none is requested.
    pub fn default_action(&self) -> Action {
        Action::Help
    }

    /// Look up an action by name.
    pub fn get(&self, name: &str) -> Option<Action> {
        self.entries
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, action, _)| *action)
    }

    /// Resolve every requested name, failing on the first unknown one.
    ///
    /// An empty request resolves to the default action.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Action>> {
        if names.is_empty() {
            return Ok(vec![self.default_action()]);
        }
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name).ok_or_else(|| BootstrapError::UnknownAction {
                    name: name.to_string(),
                    available: self.names().join(", "),
                })
            })
            .collect()
    }

    /// Registered names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _, _)| n.as_str()).collect()
    }

    /// `(name, description)` pairs in display order.
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(n, _, d)| (n.as_str(), d.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ActionRegistry {
        ActionRegistry::from_base(&BaseConfig::default())
    }

    #[test]
    fn looks_up_default_names() {
        assert_eq!(registry().get("help"), Some(Action::Help));
        assert_eq!(registry().get("setup"), Some(Action::Setup));
        assert_eq!(registry().get("install"), None);
    }

    #[test]
    fn empty_request_defaults_to_help() {
        let names: [&str; 0] = [];
        assert_eq!(registry().resolve(&names).unwrap(), vec![Action::Help]);
    }

    #[test]
    fn resolves_in_request_order() {
        let actions = registry().resolve(&["setup", "help"]).unwrap();
        assert_eq!(actions, vec![Action::Setup, Action::Help]);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = registry().resolve(&["help", "install"]).unwrap_err();
        assert!(matches!(err, BootstrapError::UnknownAction { ref name, .. } if name == "install"));
    }

    #[test]
    fn honours_renamed_actions() {
        let base = BaseConfig {
            setup_action: "bootstrap".to_string(),
            ..Default::default()
        };
        let registry = ActionRegistry::from_base(&base);
        assert_eq!(registry.get("bootstrap"), Some(Action::Setup));
        assert_eq!(registry.get("setup"), None);
    }
}
