//! Non-interactive UI for CI/headless environments.

use std::io::Write;

use super::{OutputMode, UserInterface};

/// Plain UI used when stdout is not a terminal or CI is detected.
#[derive(Debug)]
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}\n", title);
        }
    }

    fn show_step(&mut self, current: usize, total: usize, name: &str, command: &str) {
        if !self.mode.shows_status() {
            return;
        }
        println!("[{}/{}] {}", current, total, name);
        if self.mode.shows_commands() {
            println!("    {}", command);
        }
    }
}
