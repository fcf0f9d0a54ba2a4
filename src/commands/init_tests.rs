use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::InitArgs;
use crate::config::{Config, DEFAULT_PACKS_DIR, DEFAULT_REFERENCE, parse_config};
use crate::finding::Severity;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn template_contains_both_sections() {
    let template = generate_config_template();
    assert!(template.contains("[packs]"));
    assert!(template.contains("[check]"));
    assert!(template.contains("min_severity = \"notice\""));
}

#[test]
fn template_parses_to_defaults() {
    let config = parse_config(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.packs.dir.to_str(), Some(DEFAULT_PACKS_DIR));
    assert_eq!(config.packs.reference, DEFAULT_REFERENCE);
    assert_eq!(config.check.min_severity, Severity::Notice);
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".langpack-guard.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[packs]"));
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".langpack-guard.toml");
    std::fs::write(&config_path, "# mine\n").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# mine\n");
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".langpack-guard.toml");
    std::fs::write(&config_path, "# mine\n").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("reference = \"en\""));
}
