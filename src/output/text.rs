use std::fmt::Write;

use crate::error::Result;
use crate::finding::{Finding, Severity};

use super::{ColorMode, OutputFormatter, ansi};

/// Human readable report grouped by file.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(&std::io::stdout()),
        }
    }

    /// Formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    const fn icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Fail => "✗",
            Severity::Warning => "⚠",
            Severity::Notice => "ℹ",
            Severity::Debug => "·",
        }
    }

    const fn color(severity: Severity) -> &'static str {
        match severity {
            Severity::Fail => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Notice => ansi::CYAN,
            Severity::Debug => ansi::DIM,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let label = format!(
            "{} {:<7}",
            Self::icon(finding.severity),
            finding.severity.as_str().to_uppercase()
        );
        let _ = writeln!(
            output,
            "  {} {}",
            self.colorize(&label, Self::color(finding.severity)),
            finding.render()
        );
    }

    fn format_summary(&self, findings: &[Finding], files_checked: usize) -> String {
        let count = |severity| findings.iter().filter(|f| f.severity == severity).count();
        let failures = count(Severity::Fail);
        let warnings = count(Severity::Warning);
        let notices = count(Severity::Notice);

        let failures_str = if failures == 0 {
            self.colorize("0", ansi::GREEN)
        } else {
            self.colorize(&failures.to_string(), ansi::RED)
        };
        let warnings_str = self.colorize(&warnings.to_string(), ansi::YELLOW);
        let notices_str = self.colorize(&notices.to_string(), ansi::CYAN);

        format!(
            "Summary: {files_checked} files checked, {failures_str} failures, {warnings_str} warnings, {notices_str} notices"
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, findings: &[Finding], files_checked: usize) -> Result<String> {
        let mut output = String::new();

        // Findings arrive in path order, so each file is one contiguous run
        for group in findings.chunk_by(|a, b| a.file == b.file) {
            let _ = writeln!(output, "{}", self.colorize(&group[0].file, ansi::BOLD));
            for finding in group {
                self.format_finding(finding, &mut output);
            }
            output.push('\n');
        }

        output.push_str(&self.format_summary(findings, files_checked));
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
