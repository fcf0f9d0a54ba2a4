use std::path::PathBuf;

use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn empty_reference_is_rejected() {
    let mut config = Config::default();
    config.packs.reference = "  ".to_string();
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("packs.reference must not be empty"));
}

#[test]
fn reference_must_not_be_a_path() {
    for locale in ["../en", "en/sub", "/en", "."] {
        assert!(validate_locale(locale).is_err(), "{locale}");
    }
    assert!(validate_locale("en_us").is_ok());
}

#[test]
fn empty_packs_dir_is_rejected() {
    let mut config = Config::default();
    config.packs.dir = PathBuf::new();
    assert!(matches!(
        validate_config_semantics(&config),
        Err(LangpackGuardError::Config(_))
    ));
}

#[test]
fn invalid_exclude_glob_is_rejected() {
    let mut config = Config::default();
    config.check.exclude = vec!["email/*.txt".to_string(), "acp/[".to_string()];
    match validate_config_semantics(&config) {
        Err(LangpackGuardError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "acp/["),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}
