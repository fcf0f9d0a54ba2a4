use super::*;
use crate::finding::MessageId;

fn finding(severity: Severity, message: MessageId, file: &str, args: &[&str]) -> Finding {
    Finding::new(
        severity,
        message,
        file,
        args.iter().map(ToString::to_string).collect(),
    )
}

#[test]
fn empty_report_has_only_summary() {
    let output = TextFormatter::with_colors(false).format(&[], 3).unwrap();
    assert_eq!(
        output,
        "Summary: 3 files checked, 0 failures, 0 warnings, 0 notices\n"
    );
}

#[test]
fn findings_are_grouped_by_file() {
    let findings = vec![
        finding(Severity::Fail, MessageId::MissingKey, "common.php", &["A"]),
        finding(Severity::Fail, MessageId::ExtraKey, "common.php", &["B"]),
        finding(Severity::Notice, MessageId::EmailMissingNewline, "email/a.txt", &[]),
    ];
    let output = TextFormatter::with_colors(false)
        .format(&findings, 2)
        .unwrap();

    assert_eq!(output.matches("common.php\n").count(), 1);
    assert!(output.contains("  ✗ FAIL    Missing language key 'A'\n"));
    assert!(output.contains("email/a.txt\n  ℹ NOTICE  Email should end with a new line\n"));
    assert!(output.ends_with("Summary: 2 files checked, 2 failures, 0 warnings, 1 notices\n"));
}

#[test]
fn colors_are_applied_when_enabled() {
    let findings = vec![finding(
        Severity::Warning,
        MessageId::KeyMissingVars,
        "common.php",
        &["KEY", "{U_LINK}"],
    )];
    let output = TextFormatter::with_colors(true)
        .format(&findings, 1)
        .unwrap();
    assert!(output.contains(ansi::YELLOW));
    assert!(output.contains(ansi::RESET));
}

#[test]
fn no_colors_means_no_escape_codes() {
    let findings = vec![finding(Severity::Fail, MessageId::InvalidIsoFile, "iso.txt", &[])];
    let output = TextFormatter::with_colors(false)
        .format(&findings, 1)
        .unwrap();
    assert!(!output.contains('\x1b'));
}
