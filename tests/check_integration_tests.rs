//! Integration tests for the `check` command.

mod common;

use common::{TestFixture, lang_file};
use predicates::prelude::*;

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn check_matching_packs_succeeds() {
    let fixture = TestFixture::with_matching_packs();

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 3 files checked, 0 failures"));
}

#[test]
fn check_missing_key_fails() {
    let fixture = TestFixture::with_matching_packs();
    fixture.create_pack_file(
        "en",
        "common.php",
        &lang_file("\t'GREETING' => 'Hello %s',\n\t'FAREWELL' => 'Bye',"),
    );

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing language key 'FAREWELL'"));
}

#[test]
fn check_unknown_locale_is_config_error() {
    let fixture = TestFixture::with_matching_packs();

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "xx"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown language 'xx'"));
}

#[test]
fn check_strict_turns_warnings_into_failures() {
    let fixture = TestFixture::with_matching_packs();
    fixture.create_pack_file(
        "de",
        "common.php",
        &lang_file("\t'GREETING' => 'Hallo',"),
    );

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de"])
        .assert()
        .success();

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--strict"])
        .assert()
        .code(1);
}

#[test]
fn check_strict_from_config_file() {
    let fixture = TestFixture::with_matching_packs();
    fixture.create_pack_file(
        "de",
        "common.php",
        &lang_file("\t'GREETING' => 'Hallo',"),
    );
    fixture.create_config("[check]\nstrict = true\n");

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de"])
        .assert()
        .code(1);

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--no-config"])
        .assert()
        .success();
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn check_json_output_lists_findings() {
    let fixture = TestFixture::with_matching_packs();
    fixture.create_pack_file("de", "email/welcome.txt", "Hi {USERNAME}\n\n{EMAIL_SIG}\n");

    let output = langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["files_checked"], 3);
    let findings = report["findings"].as_array().unwrap();
    assert!(findings.iter().any(|f| {
        f["file"] == "email/welcome.txt" && f["severity"] == "fail"
    }));
}

#[test]
fn check_writes_report_to_file() {
    let fixture = TestFixture::with_matching_packs();
    let report = fixture.path().join("out/report.json");

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "-f", "json", "-o", report.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("\"files_checked\": 3"));
}

#[test]
fn check_quiet_suppresses_stdout() {
    let fixture = TestFixture::with_matching_packs();

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// File Selection
// =============================================================================

#[test]
fn check_explicit_files_only() {
    let fixture = TestFixture::with_matching_packs();
    fixture.create_pack_file("de", "index.htm", "<p>nope</p>");

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "common.php", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files checked"));
}

#[test]
fn check_exclude_skips_files() {
    let fixture = TestFixture::with_matching_packs();
    fixture.create_pack_file("de", "index.htm", "<p>nope</p>");

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--color", "never"])
        .assert()
        .code(1);

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "-x", "*.htm", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 files checked"));
}

#[test]
fn check_missing_candidate_file_is_error() {
    let fixture = TestFixture::with_matching_packs();
    fixture.create_pack_file("en", "acp/board.php", &lang_file("\t'BOARD' => 'Board',"));

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "de", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("board.php"));
}

#[test]
fn check_custom_packages_dir_and_reference() {
    let fixture = TestFixture::new();
    for locale in ["en_us", "fr"] {
        fixture.create_file(
            &format!("packs/{locale}/common.php"),
            &lang_file("\t'YES' => 'Oui',"),
        );
    }

    langpack_guard!()
        .current_dir(fixture.path())
        .args(["check", "fr", "-d", "packs", "-a", "en_us"])
        .assert()
        .success();
}
