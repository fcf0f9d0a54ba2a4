use super::*;

#[test]
fn empty_report() {
    let output = JsonFormatter.format(&[], 4).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["files_checked"], 4);
    assert_eq!(parsed["summary"]["fail"], 0);
    assert_eq!(parsed["findings"].as_array().unwrap().len(), 0);
}

#[test]
fn findings_carry_id_args_and_text() {
    let findings = vec![
        Finding::new(
            Severity::Fail,
            MessageId::ExtraKey,
            "common.php",
            vec!["EXTRA".to_string()],
        ),
        Finding::new(Severity::Debug, MessageId::FileNotValidated, "README", Vec::new()),
    ];
    let output = JsonFormatter.format(&findings, 2).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["fail"], 1);
    assert_eq!(parsed["summary"]["debug"], 1);

    let first = &parsed["findings"][0];
    assert_eq!(first["severity"], "fail");
    assert_eq!(first["message"], "extra_key");
    assert_eq!(first["file"], "common.php");
    assert_eq!(first["args"][0], "EXTRA");
    assert_eq!(
        first["text"],
        "Language key 'EXTRA' does not exist in the reference language"
    );
}
