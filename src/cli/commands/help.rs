//! The `help` action.

use super::dispatcher::{Command, CommandResult};
use super::registry::ActionRegistry;
use crate::error::Result;
use crate::ui::UserInterface;

/// Prints the fixed list of actions.
pub struct HelpCommand<'a> {
    registry: &'a ActionRegistry,
}

impl<'a> HelpCommand<'a> {
    pub fn new(registry: &'a ActionRegistry) -> Self {
        Self { registry }
    }

    /// Render the help text. The output depends only on the registry.
    pub fn render(&self) -> String {
        let width = self
            .registry
            .names()
            .iter()
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(0)
            + 4;

        let mut text = format!("Usage: {} [ACTION]...\n\nActions:\n", env!("CARGO_PKG_NAME"));
        for (name, description) in self.registry.descriptions() {
            text.push_str(&format!("  {:<width$}{}\n", name, description, width = width));
        }
        text
    }
}

impl Command for HelpCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(&self.render());
        Ok(CommandResult::success())
    }
}
