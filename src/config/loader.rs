use std::path::{Path, PathBuf};

use crate::error::{LangpackGuardError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config_semantics;

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".langpack-guard.toml";

/// Result of loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// File the config came from, `None` when defaults were used.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads `.langpack-guard.toml` from the current directory.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .working_dir()
            .ok()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        if let Some(path) = self.local_config_path()
            && self.fs.is_file(&path)
        {
            return self.load_from_path(&path);
        }

        tracing::debug!("No {CONFIG_FILE_NAME} found, using defaults");
        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_file(path)
            .map_err(|source| LangpackGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = parse_config(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

/// Parse and validate TOML content.
///
/// # Errors
/// Returns an error on TOML syntax errors, unknown value types or
/// semantically invalid values.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config_semantics(&config)?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
