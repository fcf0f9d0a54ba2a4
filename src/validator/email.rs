use indexmap::IndexSet;
use regex::Regex;

use crate::error::Result;
use crate::finding::{Findings, MessageId, escape_for_message};

use super::FileValidator;
use super::key::KeyValidator;

const SUBJECT_PREFIX: &str = "Subject: ";
const SIGNATURE: &str = "{EMAIL_SIG}";

/// Patterns used on email templates.
pub struct EmailRules {
    template_var: Regex,
    html: Regex,
}

impl Default for EmailRules {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailRules {
    #[must_use]
    pub fn new() -> Self {
        Self {
            template_var: Regex::new(r"\{.+?\}").expect("Invalid regex"),
            html: Regex::new(r"<.+?>").expect("Invalid regex"),
        }
    }

    /// Distinct `{...}` variables in order of first use.
    #[must_use]
    pub fn template_vars<'a>(&self, text: &'a str) -> IndexSet<&'a str> {
        self.template_var.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Angle-bracket tags that are not `<!-- ... -->` comments.
    #[must_use]
    pub fn html_tags<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.html
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|tag| !(tag.starts_with("<!-- ") && tag.ends_with(" -->")))
            .collect()
    }
}

fn has_subject(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| line.starts_with(SUBJECT_PREFIX))
}

/// The signature may sit on the last line or, when the file ends with a
/// newline, on the one before it.
fn has_signature(lines: &[&str]) -> bool {
    lines.iter().rev().take(2).any(|line| *line == SIGNATURE)
}

impl<K: KeyValidator> FileValidator<K> {
    pub(super) fn validate_email(
        &self,
        file: &str,
        source: &str,
        findings: &mut Findings,
    ) -> Result<()> {
        let reference = self.reference.read_text(file)?;
        let ref_lines: Vec<&str> = reference.split('\n').collect();
        let cand_lines: Vec<&str> = source.split('\n').collect();

        match (has_subject(&ref_lines), has_subject(&cand_lines)) {
            (true, false) => findings.fail(MessageId::EmailMissingSubject, file, Vec::new()),
            (false, true) => findings.fail(MessageId::EmailInvalidSubject, file, Vec::new()),
            _ => {}
        }

        match (has_signature(&ref_lines), has_signature(&cand_lines)) {
            (true, false) => findings.fail(MessageId::EmailMissingSignature, file, Vec::new()),
            (false, true) => findings.fail(MessageId::EmailInvalidSignature, file, Vec::new()),
            _ => {}
        }

        let ref_vars = self.email.template_vars(&reference);
        let cand_vars = self.email.template_vars(source);
        let additional: Vec<&str> = cand_vars.difference(&ref_vars).copied().collect();
        if !additional.is_empty() {
            findings.warning(
                MessageId::EmailAdditionalVars,
                file,
                vec![additional.join(", ")],
            );
        }
        let missing: Vec<&str> = ref_vars.difference(&cand_vars).copied().collect();
        if !missing.is_empty() {
            findings.warning(MessageId::EmailMissingVars, file, vec![missing.join(", ")]);
        }

        for tag in self.email.html_tags(source) {
            findings.fail(MessageId::EmailAdditionalHtml, file, vec![escape_for_message(tag)]);
        }

        if cand_lines.last().is_some_and(|line| !line.is_empty()) {
            findings.notice(MessageId::EmailMissingNewline, file, Vec::new());
        }

        Ok(())
    }
}
