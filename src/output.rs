//! Terminal output formatting for the evc CLI.
//!
//! Cargo-style status lines with a right-aligned coloured verb. Status output
//! goes to stderr; stdout is reserved for machine-readable output.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Colour of the verb column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tint {
    Green,
    Yellow,
    Cyan,
}

impl Tint {
    fn code(self) -> &'static str {
        match self {
            Tint::Green => GREEN,
            Tint::Yellow => YELLOW,
            Tint::Cyan => CYAN,
        }
    }
}

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits ANSI codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Progress or completion, e.g. "     Writing shares/share1.png".
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tint::Green, verb, message);
    }

    /// Informational line, e.g. which manifest was picked up.
    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tint::Cyan, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tint::Yellow, verb, message);
    }

    fn emit(&self, tint: Tint, verb: &str, message: &str) {
        let line = self.format_line(tint, verb, message);
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }

    fn format_line(&self, tint: Tint, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tint.code())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

/// Pluralize a count: `plural(2, "share", "shares")` gives "2 shares".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            return if s.is_empty() { ".".to_string() } else { s };
        }
    }
    path.display().to_string()
}
