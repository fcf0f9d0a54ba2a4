use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn explicit_color_modes_ignore_stream() {
    assert!(ColorMode::Always.use_colors(&std::io::stdout()));
    assert!(!ColorMode::Never.use_colors(&std::io::stdout()));
}
