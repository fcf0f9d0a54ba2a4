use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LangpackGuardError, Result};

/// Decides whether a relative, `/`-separated pack path is checked.
pub trait FileFilter {
    fn should_include(&self, relative: &str) -> bool;
}

/// Excludes paths matching any of a set of glob patterns.
pub struct GlobFilter {
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a filter from exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LangpackGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LangpackGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, relative: &str) -> bool {
        !self.exclude_patterns.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
