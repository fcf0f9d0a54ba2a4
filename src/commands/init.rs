use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, LangpackGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(LangpackGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    tracing::debug!(path = %output_path.display(), "Wrote configuration template");

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# langpack-guard configuration file

[packs]
# Directory holding one folder per locale (default: "language")
dir = "language"

# Locale every other pack is compared against (default: "en")
reference = "en"

[check]
# Files to skip, as globs relative to the pack root
# exclude = ["email/short/**", "acp/*.php"]
exclude = []

# Strict mode: treat warnings as failures (default: false)
strict = false

# Lowest severity shown in reports: fail, warning, notice or debug
min_severity = "notice"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
