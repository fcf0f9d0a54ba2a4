use serde::Serialize;

use crate::error::Result;
use crate::finding::{Finding, MessageId, Severity};

use super::OutputFormatter;

/// Machine readable report.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    findings: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    fail: usize,
    warning: usize,
    notice: usize,
    debug: usize,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    severity: Severity,
    message: MessageId,
    file: &'a str,
    args: &'a [String],
    text: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, findings: &[Finding], files_checked: usize) -> Result<String> {
        let count = |severity| findings.iter().filter(|f| f.severity == severity).count();

        let output = JsonOutput {
            summary: Summary {
                files_checked,
                fail: count(Severity::Fail),
                warning: count(Severity::Warning),
                notice: count(Severity::Notice),
                debug: count(Severity::Debug),
            },
            findings: findings
                .iter()
                .map(|f| JsonFinding {
                    severity: f.severity,
                    message: f.message,
                    file: &f.file,
                    args: &f.args,
                    text: f.render(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
