use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangpackGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A language pack root that does not exist on disk.
    #[error("Invalid language '{locale}': {} does not exist", path.display())]
    InvalidLanguage { locale: String, path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path} (line {line}): {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LangpackGuardError {
    /// Short category name used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidLanguage { .. } => "Language",
            Self::FileRead { .. } => "FileRead",
            Self::Parse { .. } => "Parse",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::InvalidLanguage { locale, .. } => format!("unknown language '{locale}'"),
            Self::FileRead { path, .. } | Self::Parse { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidLanguage { path, .. } => {
                Some(format!("directory not found: {}", path.display()))
            }
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::Parse { line, message, .. } => Some(format!("line {line}: {message}")),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Actionable hint printed below the error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidLanguage { .. } => {
                Some("check --packages-dir and the locale name (e.g. 'en', 'de_x_sie')")
            }
            Self::Parse { .. } => Some(
                "language files may only declare their variable with literal values",
            ),
            Self::InvalidPattern { .. } => Some("check the glob syntax in [check].exclude"),
            Self::TomlParse(_) => Some("run `langpack-guard config validate` for details"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LangpackGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
