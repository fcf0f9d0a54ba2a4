use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = LangpackGuardError::Config("missing reference locale".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: missing reference locale"
    );
}

#[test]
fn error_display_invalid_language() {
    let err = LangpackGuardError::InvalidLanguage {
        locale: "xx".to_string(),
        path: PathBuf::from("language/xx"),
    };
    let text = err.to_string();
    assert!(text.contains("'xx'"));
    assert!(text.contains("language/xx"));
}

#[test]
fn error_display_parse_includes_line() {
    let err = LangpackGuardError::Parse {
        path: PathBuf::from("en/common.php"),
        line: 12,
        message: "unexpected token".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to parse en/common.php (line 12): unexpected token"
    );
}

#[test]
fn error_display_file_read() {
    let err = LangpackGuardError::FileRead {
        path: PathBuf::from("de/common.php"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("de/common.php"));
}

#[test]
fn error_type_returns_category() {
    assert_eq!(
        LangpackGuardError::Config("x".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        LangpackGuardError::InvalidLanguage {
            locale: "xx".to_string(),
            path: PathBuf::from("xx"),
        }
        .error_type(),
        "Language"
    );
    assert_eq!(
        LangpackGuardError::Io(std::io::Error::other("boom")).error_type(),
        "IO"
    );
}

#[test]
fn message_strips_prefix() {
    let err = LangpackGuardError::Config("bad value".to_string());
    assert_eq!(err.message(), "bad value");

    let err = LangpackGuardError::FileRead {
        path: PathBuf::from("a.php"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.message(), "a.php");
}

#[test]
fn detail_returns_source_info() {
    let err = LangpackGuardError::Config("x".to_string());
    assert!(err.detail().is_none());

    let err = LangpackGuardError::FileRead {
        path: PathBuf::from("a.php"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.detail().as_deref(), Some("not found"));

    let err = LangpackGuardError::Parse {
        path: PathBuf::from("a.php"),
        line: 3,
        message: "unterminated string".to_string(),
    };
    assert_eq!(err.detail().as_deref(), Some("line 3: unterminated string"));
}

#[test]
fn invalid_language_has_suggestion() {
    let err = LangpackGuardError::InvalidLanguage {
        locale: "xx".to_string(),
        path: PathBuf::from("xx"),
    };
    assert!(err.suggestion().is_some());
    assert!(LangpackGuardError::Config("x".to_string()).suggestion().is_none());
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::other("disk");
    let err: LangpackGuardError = io.into();
    assert!(matches!(err, LangpackGuardError::Io(_)));
}
