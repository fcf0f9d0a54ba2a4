//! Per-file validation rules.
//!
//! [`FileValidator`] applies the checks shared by every file, classifies the
//! path and hands the file to the routine for its [`FileKind`].

mod email;
mod help;
mod key;
mod kind;
mod lang;
mod search;
mod static_files;
mod value;

pub use key::{KeyValidator, PlaceholderKeyValidator};
pub use kind::FileKind;
pub use static_files::{INDEX_PAGE_SHA256, index_digest};
pub use value::LanguageValue;

use regex::bytes::Regex as BytesRegex;

use crate::error::{LangpackGuardError, Result};
use crate::finding::{Findings, MessageId, escape_for_message};
use crate::pack::LanguagePack;
use crate::php::{self, Evaluation, PhpArray};

use email::EmailRules;

/// Validates files of a candidate pack against the reference pack.
pub struct FileValidator<K: KeyValidator = PlaceholderKeyValidator> {
    candidate: LanguagePack,
    reference: LanguagePack,
    key_validator: K,
    include_guard: BytesRegex,
    email: EmailRules,
}

impl FileValidator {
    #[must_use]
    pub fn new(candidate: LanguagePack, reference: LanguagePack) -> Self {
        Self::with_key_validator(candidate, reference, PlaceholderKeyValidator::new())
    }
}

impl<K: KeyValidator> FileValidator<K> {
    /// Use a custom strategy for comparing individual language keys.
    #[must_use]
    pub fn with_key_validator(
        candidate: LanguagePack,
        reference: LanguagePack,
        key_validator: K,
    ) -> Self {
        Self {
            candidate,
            reference,
            key_validator,
            include_guard: BytesRegex::new(r"defined *\( *'IN_PHPBB'").expect("Invalid regex"),
            email: EmailRules::new(),
        }
    }

    /// Validate one relative file path, pushing findings.
    ///
    /// # Errors
    /// Returns an error if the candidate or reference file cannot be read, or
    /// if the reference data file cannot be parsed.
    pub fn validate(&self, file: &str, findings: &mut Findings) -> Result<()> {
        let bytes = self.candidate.read(file)?;

        if bytes.contains(&b'\r') {
            findings.fail(MessageId::NonUnixLineEndings, file, Vec::new());
        }
        if file.ends_with(".php") && !self.include_guard.is_match(&bytes) {
            findings.fail(MessageId::MissingIncludeGuard, file, Vec::new());
        }

        let kind = FileKind::classify(file);
        tracing::debug!(file, %kind, "Validating file");

        match kind {
            FileKind::LangArray => self.validate_lang(file, &text(&bytes), findings),
            FileKind::EmailTemplate => self.validate_email(file, &text(&bytes), findings),
            FileKind::HelpArray => {
                self.validate_help(file, &text(&bytes), findings);
                Ok(())
            }
            FileKind::SearchSynonyms => {
                self.validate_synonyms(file, &text(&bytes), findings);
                Ok(())
            }
            FileKind::SearchIgnoreWords => {
                self.validate_ignore_words(file, &text(&bytes), findings);
                Ok(())
            }
            FileKind::IndexPage => {
                static_files::validate_index(file, &bytes, findings);
                Ok(())
            }
            FileKind::IsoMetadata => {
                static_files::validate_iso(file, &bytes, findings);
                Ok(())
            }
            FileKind::Unrecognized => {
                findings.debug(MessageId::FileNotValidated, file, Vec::new());
                Ok(())
            }
        }
    }

    /// Evaluate candidate source; a syntax error becomes a finding.
    fn evaluate_candidate(
        file: &str,
        source: &str,
        findings: &mut Findings,
    ) -> Option<Evaluation> {
        match php::evaluate(source) {
            Ok(evaluation) => Some(evaluation),
            Err(e) => {
                findings.fail(
                    MessageId::ParseError,
                    file,
                    vec![e.line.to_string(), e.message],
                );
                None
            }
        }
    }

    /// Evaluate the reference copy of `file`. The reference is trusted, so a
    /// syntax error here is a hard error rather than a finding.
    fn evaluate_reference(&self, file: &str) -> Result<Evaluation> {
        let source = self.reference.read_text(file)?;
        php::evaluate(&source).map_err(|e| LangpackGuardError::Parse {
            path: self.reference.resolve(file),
            line: e.line,
            message: e.message,
        })
    }

    /// The declared array of a data file that must bind only `variable`.
    ///
    /// Any other binding is reported, and `None` is returned when the file
    /// cannot be inspected further. With `strict` set, extra bindings abort
    /// as well.
    fn declared_array<'e>(
        evaluation: &'e Evaluation,
        variable: &str,
        file: &str,
        strict: bool,
        findings: &mut Findings,
    ) -> Option<&'e PhpArray> {
        let declaration = evaluation.declaration(variable);
        if declaration.is_valid() {
            return declaration.array();
        }
        findings.fail(
            MessageId::InvalidVariableDeclaration,
            file,
            vec![variable.to_string()],
        );
        if strict { None } else { declaration.array() }
    }

    fn check_output(evaluation: &Evaluation, file: &str, findings: &mut Findings) {
        if !evaluation.output().is_empty() {
            findings.fail(
                MessageId::UnexpectedOutput,
                file,
                vec![escape_for_message(evaluation.output())],
            );
        }
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
