use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_locale};
use crate::finding::{Finding, Findings};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::pack::LanguagePack;
use crate::scanner::{FileFilter, FileScanner, GlobFilter, PackScanner};
use crate::validator::{FileValidator, KeyValidator};
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURES_FOUND, EXIT_SUCCESS, LangpackGuardError, Result};

/// Everything a check run produced, in file order.
#[derive(Debug, Default)]
pub struct CheckOutcome {
    pub files_checked: usize,
    pub findings: Findings,
    /// Files whose validation stopped on an error.
    pub errors: Vec<(String, LangpackGuardError)>,
}

impl CheckOutcome {
    /// Exit code for this outcome. Errors win over findings.
    #[must_use]
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !self.errors.is_empty() {
            EXIT_CONFIG_ERROR
        } else if self.findings.has_failures() || (strict && self.findings.has_warnings()) {
            EXIT_FAILURES_FOUND
        } else {
            EXIT_SUCCESS
        }
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validate a language pack and write the report.
///
/// # Errors
/// Returns an error if the configuration is invalid, a language pack does
/// not exist, the reference pack cannot be listed or the report cannot be
/// written. Errors in single files are reported and do not abort the run.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_locale(&args.locale)
        .map_err(|reason| LangpackGuardError::Config(format!("locale {reason}")))?;
    validate_locale(&config.packs.reference)
        .map_err(|reason| LangpackGuardError::Config(format!("reference locale {reason}")))?;

    // 3. Open both packs, failing before any file is read
    let candidate = LanguagePack::open(&config.packs.dir, &args.locale)?;
    let reference = LanguagePack::open(&config.packs.dir, &config.packs.reference)?;

    // 4. Select files
    let files = select_files(args, &config, &reference)?;
    tracing::info!(
        locale = candidate.locale(),
        against = reference.locale(),
        files = files.len(),
        "Validating language pack"
    );

    // 5. Validate (parallel, merged in file order)
    let validator = FileValidator::new(candidate, reference);
    let outcome = validate_files(&validator, &files);

    let error_output = ErrorOutput::new(cli.color.into());
    for (file, error) in &outcome.errors {
        tracing::warn!(file = %file, "Validation stopped: {error}");
        error_output.print(error);
    }

    // 6. Format and write output
    let shown: Vec<Finding> = outcome
        .findings
        .iter()
        .filter(|f| f.severity.is_at_least(config.check.min_severity))
        .cloned()
        .collect();
    let output = format_output(args.format, &shown, outcome.files_checked, cli.color.into())?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    tracing::info!(
        files = outcome.files_checked,
        findings = outcome.findings.len(),
        errors = outcome.errors.len(),
        "Check finished"
    );

    // 7. Determine exit code
    Ok(outcome.exit_code(config.check.strict))
}

/// Validate every file on the rayon pool. Each file gets its own buffer and
/// buffers are merged in input order, so the result matches a sequential run.
pub fn validate_files<K: KeyValidator>(
    validator: &FileValidator<K>,
    files: &[String],
) -> CheckOutcome {
    let results: Vec<(Findings, Option<LangpackGuardError>)> = files
        .par_iter()
        .map(|file| {
            let mut findings = Findings::new();
            let error = validator.validate(file, &mut findings).err();
            (findings, error)
        })
        .collect();

    let mut outcome = CheckOutcome {
        files_checked: files.len(),
        ..CheckOutcome::default()
    };
    for (file, (findings, error)) in files.iter().zip(results) {
        outcome.findings.extend(findings);
        if let Some(error) = error {
            outcome.errors.push((file.clone(), error));
        }
    }
    outcome
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(result.config)
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(dir) = &args.packages_dir {
        config.packs.dir.clone_from(dir);
    }
    if let Some(against) = &args.against {
        config.packs.reference.clone_from(against);
    }
    config.check.exclude.extend(args.exclude.iter().cloned());
    if args.strict {
        config.check.strict = true;
    }
    if let Some(min_severity) = args.min_severity {
        config.check.min_severity = min_severity;
    }
}

/// Files named on the command line, or every file of the reference pack.
fn select_files(
    args: &CheckArgs,
    config: &Config,
    reference: &LanguagePack,
) -> Result<Vec<String>> {
    let filter = GlobFilter::new(&config.check.exclude)?;
    if args.files.is_empty() {
        return PackScanner::new(filter).scan(reference.root());
    }

    Ok(args
        .files
        .iter()
        .map(|file| file.replace('\\', "/"))
        .filter(|file| {
            let keep = filter.should_include(file);
            if !keep {
                tracing::warn!(file = %file, "Skipping excluded file");
            }
            keep
        })
        .collect())
}

fn format_output(
    format: OutputFormat,
    findings: &[Finding],
    files_checked: usize,
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(findings, files_checked),
        OutputFormat::Json => JsonFormatter.format(findings, files_checked),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
