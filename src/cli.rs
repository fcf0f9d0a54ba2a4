use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::CONFIG_FILE_NAME;
use crate::finding::Severity;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "langpack-guard")]
#[command(author, version, about = "Validate translated language packs against a reference language")]
#[command(long_about = "Checks every file of a translated language pack against the same file \
    of the reference language: declared variables, missing and extra keys, placeholders, \
    email templates, help files and static files.\n\n\
    Exit codes:\n  \
    0 - No failures found\n  \
    1 - Failures found (or warnings with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a language pack against the reference language
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Locale of the pack to validate (directory name, e.g. `de`)
    pub locale: String,

    /// Relative files to check instead of the whole reference pack
    pub files: Vec<String>,

    /// Locale to validate against (overrides config)
    #[arg(short, long)]
    pub against: Option<String>,

    /// Directory holding one folder per locale (overrides config)
    #[arg(short = 'd', long)]
    pub packages_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Lowest severity to report [possible values: fail, warning, notice, debug]
    #[arg(long)]
    pub min_severity: Option<Severity>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
