//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot be used.

use std::path::Component;

use crate::config::Config;
use crate::{LangpackGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the reference locale or packs directory is unusable,
/// or an exclude glob is invalid.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_packs_section(config)?;
    validate_glob_patterns(config)?;
    Ok(())
}

fn validate_packs_section(config: &Config) -> Result<()> {
    if config.packs.dir.as_os_str().is_empty() {
        return Err(LangpackGuardError::Config(
            "packs.dir must not be empty".to_string(),
        ));
    }

    validate_locale(&config.packs.reference)
        .map_err(|reason| LangpackGuardError::Config(format!("packs.reference {reason}")))
}

/// A locale must name a single directory inside the packs directory.
///
/// # Errors
/// Returns a short reason when the locale is empty or is a path.
pub fn validate_locale(locale: &str) -> std::result::Result<(), String> {
    if locale.trim().is_empty() {
        return Err("must not be empty".to_string());
    }
    let mut components = std::path::Path::new(locale).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(format!("'{locale}' must be a single directory name")),
    }
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.check.exclude {
        globset::Glob::new(pattern).map_err(|e| LangpackGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
