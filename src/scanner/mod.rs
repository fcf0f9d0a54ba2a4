mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{LangpackGuardError, Result};

/// Trait for listing the files of a language pack.
pub trait FileScanner {
    /// List relative, `/`-separated file paths under `root`, sorted.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<String>>;
}

/// Walks a pack directory and keeps the files its filter accepts.
pub struct PackScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> PackScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for PackScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| LangpackGuardError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = relative_path(relative);
            if self.filter.should_include(&relative) {
                files.push(relative);
            } else {
                tracing::debug!(file = %relative, "Excluded by pattern");
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Join path components with `/` regardless of platform.
#[must_use]
pub fn relative_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
