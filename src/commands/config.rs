use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, parse_config};
use crate::output::{OutputFormat, print_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, LangpackGuardError, Result};

use super::check::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(LangpackGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    parse_config(&content)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[packs]\n");
    let _ = writeln!(output, "  dir = {}", config.packs.dir.display());
    let _ = writeln!(output, "  reference = {}", config.packs.reference);

    output.push_str("\n[check]\n");
    if !config.check.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.check.exclude);
    }
    let _ = writeln!(output, "  strict = {}", config.check.strict);
    let _ = writeln!(output, "  min_severity = {}", config.check.min_severity);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
