mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use std::io::IsTerminal;

use crate::error::Result;
use crate::finding::Finding;

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode for a stream.
    #[must_use]
    pub fn use_colors(self, stream: &impl IsTerminal) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Presence of NO_COLOR (any value) disables color, see no-color.org
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && stream.is_terminal(),
        }
    }
}

/// Trait for rendering a run's findings.
pub trait OutputFormatter {
    /// Format the findings of `files_checked` files into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, findings: &[Finding], files_checked: usize) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
