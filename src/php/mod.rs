//! Sandboxed reader for script-style data files.
//!
//! Language files are scripts that assign literal arrays to one variable.
//! Instead of executing them, this module tokenizes, parses and walks a
//! small fixed grammar, producing the variables left in scope plus any text
//! the file would have printed.

mod eval;
mod lexer;
mod parser;
mod value;

use eval::Evaluator;
pub use value::{ArrayKey, PhpArray, PhpValue, render_value};

use indexmap::IndexMap;
use thiserror::Error;

/// Constants treated as defined while evaluating language files.
pub const DEFAULT_CONSTANTS: &[&str] = &["IN_PHPBB"];

/// Syntax or runtime error while reading a data file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct PhpError {
    pub line: usize,
    pub message: String,
}

impl PhpError {
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Outcome of evaluating a data file.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    bindings: IndexMap<String, PhpValue>,
    output: String,
}

/// How a file's bindings match the single expected array variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'a> {
    /// Exactly the expected variable, holding an array.
    Valid(&'a PhpArray),
    /// The expected array exists, but other variables are bound as well.
    ExtraBindings(&'a PhpArray),
    /// The expected variable is unset, null, or not an array.
    Invalid,
}

impl<'a> Declaration<'a> {
    /// The array when it can still be inspected.
    #[must_use]
    pub const fn array(self) -> Option<&'a PhpArray> {
        match self {
            Self::Valid(array) | Self::ExtraBindings(array) => Some(array),
            Self::Invalid => None,
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl Evaluation {
    /// Bindings left in scope, in order of first assignment.
    #[must_use]
    pub const fn bindings(&self) -> &IndexMap<String, PhpValue> {
        &self.bindings
    }

    /// Text the file would have printed.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&PhpValue> {
        self.bindings.get(name)
    }

    /// Check that `name` is the only binding and that it holds an array.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Declaration<'_> {
        let Some(array) = self.binding(name).and_then(PhpValue::as_array) else {
            return Declaration::Invalid;
        };
        if self.bindings.len() == 1 {
            Declaration::Valid(array)
        } else {
            Declaration::ExtraBindings(array)
        }
    }
}

/// Evaluate a data file with [`DEFAULT_CONSTANTS`] defined.
///
/// # Errors
/// Returns an error if the file uses anything outside the supported grammar.
pub fn evaluate(source: &str) -> Result<Evaluation, PhpError> {
    evaluate_with_constants(source, DEFAULT_CONSTANTS)
}

/// Evaluate a data file with the given constants defined.
///
/// # Errors
/// Returns an error if the file uses anything outside the supported grammar.
pub fn evaluate_with_constants(source: &str, constants: &[&str]) -> Result<Evaluation, PhpError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    let program = parser::Parser::new(tokens).parse_program()?;
    let (bindings, output) = Evaluator::new(constants).run(&program)?;
    Ok(Evaluation { bindings, output })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
