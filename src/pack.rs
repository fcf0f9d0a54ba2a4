use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LangpackGuardError, Result};

/// One locale's directory of translation files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePack {
    root: PathBuf,
    locale: String,
}

impl LanguagePack {
    /// Resolve `packages_dir/locale` and make sure it exists.
    ///
    /// # Errors
    /// Returns `InvalidLanguage` if the directory does not exist.
    pub fn open(packages_dir: &Path, locale: &str) -> Result<Self> {
        let root = packages_dir.join(locale);
        if !root.exists() {
            return Err(LangpackGuardError::InvalidLanguage {
                locale: locale.to_string(),
                path: root,
            });
        }
        Ok(Self {
            root,
            locale: locale.to_string(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Absolute location of a relative file path inside this pack.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Read a file fully as bytes.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read.
    pub fn read(&self, relative: &str) -> Result<Vec<u8>> {
        let path = self.resolve(relative);
        fs::read(&path).map_err(|source| LangpackGuardError::FileRead { path, source })
    }

    /// Read a file as text. Invalid UTF-8 is replaced rather than rejected so
    /// that legacy-encoded files still get their structural checks.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read.
    pub fn read_text(&self, relative: &str) -> Result<String> {
        let bytes = self.read(relative)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "pack_tests.rs"]
mod tests;
