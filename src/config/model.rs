use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::finding::Severity;

/// Default name of the directory holding one folder per locale.
pub const DEFAULT_PACKS_DIR: &str = "language";

/// Default locale every other pack is compared against.
pub const DEFAULT_REFERENCE: &str = "en";

/// Root of `.langpack-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub packs: PacksConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

/// Where the language packs live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PacksConfig {
    /// Directory holding one folder per locale.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Locale used as the reference.
    #[serde(default = "default_reference")]
    pub reference: String,
}

impl Default for PacksConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            reference: default_reference(),
        }
    }
}

/// How a check run behaves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Glob patterns of relative paths to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Treat warnings as failures for the exit code.
    #[serde(default)]
    pub strict: bool,

    /// Lowest severity that is printed.
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            strict: false,
            min_severity: default_min_severity(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PACKS_DIR)
}

fn default_reference() -> String {
    DEFAULT_REFERENCE.to_string()
}

const fn default_min_severity() -> Severity {
    Severity::Notice
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
