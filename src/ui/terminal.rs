//! Styled terminal UI.

use console::Term;

use super::non_interactive::NonInteractiveUI;
use super::theme::Theme;
use super::{OutputMode, UserInterface};

/// UI for an interactive terminal.
///
/// Status goes to stdout, warnings and errors to stderr, styled with the
/// detected [`Theme`].
pub struct TerminalUI {
    mode: OutputMode,
    theme: Theme,
    stdout: Term,
    stderr: Term,
}

impl TerminalUI {
    /// Create a terminal UI with the detected theme.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, Theme::detect())
    }

    pub fn with_theme(mode: OutputMode, theme: Theme) -> Self {
        Self {
            mode,
            theme,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    fn out(&self, line: &str) {
        let _ = self.stdout.write_line(line);
    }

    fn err(&self, line: &str) {
        let _ = self.stderr.write_line(line);
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        let _ = self.stdout.write_str(text);
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.out(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.out(&self.theme.success.apply_to(format!("✓ {}", msg)).to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        self.err(&self.theme.warning.apply_to(format!("⚠ {}", msg)).to_string());
    }

    fn error(&mut self, msg: &str) {
        self.err(&self.theme.error.apply_to(format!("✗ {}", msg)).to_string());
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.out(&self.theme.header.apply_to(title).to_string());
            self.out("");
        }
    }

    fn show_step(&mut self, current: usize, total: usize, name: &str, command: &str) {
        if !self.mode.shows_status() {
            return;
        }
        let counter = self
            .theme
            .step_number
            .apply_to(format!("[{}/{}]", current, total));
        self.out(&format!("{} {}", counter, name));
        if self.mode.shows_commands() {
            self.out(&format!("    {}", self.theme.command.apply_to(command)));
        }
    }
}

/// Create the UI for the current environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
