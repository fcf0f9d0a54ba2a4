//! Colored error and warning output on stderr.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::Write;

use crate::error::LangpackGuardError;

use super::{ColorMode, ansi};

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(&std::io::stderr()),
        }
    }

    /// Formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print an error with its detail and suggestion.
    pub fn print(&self, error: &LangpackGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Print a warning that does not stop the run.
    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &LangpackGuardError) {
        // Failing to write to stderr is not reported anywhere
        let error_type = error.error_type();
        let message = error.message();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(detail) = error.detail() {
            self.write_detail(w, &detail);
        }

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {suggestion}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {suggestion}");
            }
        }
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }

        if let Some(detail) = detail {
            self.write_detail(w, detail);
        }
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: &str) {
        if self.use_colors {
            let _ = writeln!(w, "  {}× {detail}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "  × {detail}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// Print an error using auto-detected color mode.
pub fn print_error(error: &LangpackGuardError) {
    ErrorOutput::default().print(error);
}

/// Print a warning using auto-detected color mode.
pub fn print_warning(message: &str, detail: Option<&str>) {
    ErrorOutput::default().print_warning(message, detail);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
