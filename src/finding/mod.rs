//! Classified findings and the append-only collector they are pushed to.

mod message;

pub use message::MessageId;

use serde::{Deserialize, Serialize};

/// Severity of a finding, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fail,
    Warning,
    Notice,
    Debug,
}

impl Severity {
    pub const ALL: [Self; 4] = [Self::Fail, Self::Warning, Self::Notice, Self::Debug];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Debug => "debug",
        }
    }

    /// Whether a finding of this severity should be shown when `threshold` is
    /// the least severe level requested.
    #[must_use]
    pub fn is_at_least(self, threshold: Self) -> bool {
        self <= threshold
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" | "failure" | "error" => Ok(Self::Fail),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// One structured diagnostic: severity, message id, file and positional args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: MessageId,
    pub file: String,
    pub args: Vec<String>,
}

impl Finding {
    #[must_use]
    pub fn new(severity: Severity, message: MessageId, file: &str, args: Vec<String>) -> Self {
        Self {
            severity,
            message,
            file: file.to_string(),
            args,
        }
    }

    /// Human readable text of the finding (without file and severity).
    #[must_use]
    pub fn render(&self) -> String {
        self.message.render(&self.args)
    }
}

/// Append-only, ordered collector of findings.
///
/// A validation run owns one of these and hands `&mut` to every validator.
/// Findings are never removed or modified once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    items: Vec<Finding>,
}

impl Findings {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, finding: Finding) {
        self.items.push(finding);
    }

    pub fn fail(&mut self, message: MessageId, file: &str, args: Vec<String>) {
        self.push(Finding::new(Severity::Fail, message, file, args));
    }

    pub fn warning(&mut self, message: MessageId, file: &str, args: Vec<String>) {
        self.push(Finding::new(Severity::Warning, message, file, args));
    }

    pub fn notice(&mut self, message: MessageId, file: &str, args: Vec<String>) {
        self.push(Finding::new(Severity::Notice, message, file, args));
    }

    pub fn debug(&mut self, message: MessageId, file: &str, args: Vec<String>) {
        self.push(Finding::new(Severity::Debug, message, file, args));
    }

    /// Append another collector's findings after ours, preserving their order.
    pub fn extend(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.items.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|f| f.severity == severity).count()
    }

    /// Number of findings carrying the given message id.
    #[must_use]
    pub fn count_message(&self, message: MessageId) -> usize {
        self.items.iter().filter(|f| f.message == message).count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.items.iter().any(|f| f.severity == Severity::Fail)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.items.iter().any(|f| f.severity == Severity::Warning)
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Make arbitrary file content safe to embed in a one-line message.
///
/// Control characters are shown as escapes, everything else is kept.
#[must_use]
pub fn escape_for_message(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        if c.is_control() {
            escaped.extend(c.escape_debug());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
