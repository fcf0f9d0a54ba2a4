use super::*;
use crate::finding::Severity;
use crate::php::ArrayKey;

fn check(reference: &LanguageValue, candidate: &LanguageValue) -> Findings {
    let mut findings = Findings::new();
    PlaceholderKeyValidator::new().validate("common.php", "KEY", reference, candidate, &mut findings);
    findings
}

fn scalar(text: &str) -> LanguageValue {
    LanguageValue::from(text)
}

fn plural(forms: &[(i64, &str)]) -> LanguageValue {
    LanguageValue::Sequence(
        forms
            .iter()
            .map(|(n, text)| (ArrayKey::Int(*n), scalar(text)))
            .collect(),
    )
}

fn context(entries: &[(&str, &str)]) -> LanguageValue {
    LanguageValue::Sequence(
        entries
            .iter()
            .map(|(k, text)| (ArrayKey::Str((*k).to_string()), scalar(text)))
            .collect(),
    )
}

#[test]
fn identical_placeholders_pass() {
    let findings = check(
        &scalar("Hello %s, you have %d new {L_MESSAGES}"),
        &scalar("Hallo %s, du hast %d neue {L_MESSAGES}"),
    );
    assert!(findings.is_empty(), "{findings:?}");
}

#[test]
fn additional_printf_placeholder_fails() {
    let findings = check(&scalar("Hello"), &scalar("Hallo %s"));
    assert_eq!(findings.count_message(MessageId::KeyAdditionalPlaceholders), 1);
    let finding = findings.iter().next().unwrap();
    assert_eq!(finding.severity, Severity::Fail);
    assert_eq!(finding.args, vec!["KEY".to_string(), "%s".to_string()]);
}

#[test]
fn missing_printf_placeholder_warns() {
    let findings = check(&scalar("%1$s posted %2$d times"), &scalar("%1$s hat gepostet"));
    assert_eq!(findings.count_message(MessageId::KeyMissingPlaceholders), 1);
    assert_eq!(findings.count(Severity::Warning), 1);
    assert_eq!(findings.iter().next().unwrap().args[1], "%2$d");
}

#[test]
fn reordered_positional_placeholders_pass() {
    let findings = check(&scalar("%s posted in %s"), &scalar("In %2$s schrieb %1$s"));
    assert!(findings.is_empty(), "{findings:?}");

    let findings = check(&scalar("%1$s of %2$d"), &scalar("%s von %d"));
    assert!(findings.is_empty(), "{findings:?}");
}

#[test]
fn placeholder_positions_and_types_are_compared() {
    // Second argument dropped, first used twice
    let findings = check(&scalar("%s posted in %s"), &scalar("%1$s schrieb %1$s"));
    assert_eq!(findings.count_message(MessageId::KeyMissingPlaceholders), 1);
    assert_eq!(findings.iter().next().unwrap().args[1], "%s");

    let findings = check(&scalar("%d new"), &scalar("%s neu"));
    assert_eq!(findings.count_message(MessageId::KeyAdditionalPlaceholders), 1);
    assert_eq!(findings.count_message(MessageId::KeyMissingPlaceholders), 1);
}

#[test]
fn literal_percent_is_not_a_placeholder() {
    let findings = check(&scalar("100%% sure"), &scalar("100%% sicher"));
    assert!(findings.is_empty());
    let findings = check(&scalar("50% off"), &scalar("50% Rabatt"));
    assert!(findings.is_empty());
}

#[test]
fn template_vars_are_warnings_both_ways() {
    let findings = check(&scalar("See {U_LINK}"), &scalar("Siehe {U_OTHER}"));
    assert_eq!(findings.count_message(MessageId::KeyAdditionalVars), 1);
    assert_eq!(findings.count_message(MessageId::KeyMissingVars), 1);
    assert_eq!(findings.count(Severity::Warning), 2);
}

#[test]
fn html_only_allowed_when_reference_uses_it() {
    let findings = check(
        &scalar("Click <a href=\"%s\">here</a>"),
        &scalar("Klick <a href=\"%s\" class=\"x\">hier</a>"),
    );
    assert!(findings.is_empty(), "{findings:?}");

    let findings = check(&scalar("Plain"), &scalar("<b>Fett</b>"));
    assert_eq!(findings.count_message(MessageId::KeyAdditionalHtml), 1);
    assert_eq!(findings.iter().next().unwrap().args[1], "<b>, </b>");
}

#[test]
fn html_tag_names_are_case_insensitive() {
    let findings = check(&scalar("a<BR />b"), &scalar("a<br>b"));
    assert!(findings.is_empty());
}

#[test]
fn shape_mismatch_fails() {
    let findings = check(&scalar("one"), &plural(&[(1, "one"), (2, "two")]));
    assert_eq!(findings.count_message(MessageId::KeyInvalidType), 1);
    assert_eq!(
        findings.iter().next().unwrap().args,
        vec!["KEY".to_string(), "string".to_string()]
    );

    let findings = check(&plural(&[(1, "%d item")]), &scalar("%d items"));
    assert_eq!(findings.count_message(MessageId::KeyInvalidType), 1);
}

#[test]
fn plural_forms_compare_union_of_placeholders() {
    // Singular form without %d is fine as long as some form uses it
    let findings = check(
        &plural(&[(1, "%d post"), (2, "%d posts")]),
        &plural(&[(1, "ein Beitrag"), (2, "%d Beiträge"), (3, "%d Beiträge")]),
    );
    assert!(findings.is_empty(), "{findings:?}");

    let findings = check(
        &plural(&[(1, "%d post"), (2, "%d posts")]),
        &plural(&[(1, "Beitrag"), (2, "Beiträge")]),
    );
    assert_eq!(findings.count_message(MessageId::KeyMissingPlaceholders), 1);
}

#[test]
fn context_arrays_compare_sub_keys() {
    let findings = check(
        &context(&[("TODAY", "Today"), ("YESTERDAY", "Yesterday")]),
        &context(&[("TODAY", "Heute"), ("TOMORROW", "Morgen")]),
    );
    let missing: Vec<_> = findings
        .iter()
        .filter(|f| f.message == MessageId::MissingKey)
        .map(|f| f.args[0].as_str())
        .collect();
    let extra: Vec<_> = findings
        .iter()
        .filter(|f| f.message == MessageId::ExtraKey)
        .map(|f| f.args[0].as_str())
        .collect();
    assert_eq!(missing, vec!["KEY.YESTERDAY"]);
    assert_eq!(extra, vec!["KEY.TOMORROW"]);
}

#[test]
fn context_arrays_recurse_into_shared_sub_keys() {
    let findings = check(
        &context(&[("AGO", "%d minutes ago")]),
        &context(&[("AGO", "vor Minuten")]),
    );
    assert_eq!(findings.count_message(MessageId::KeyMissingPlaceholders), 1);
    assert_eq!(findings.iter().next().unwrap().args[0], "KEY.AGO");
}

#[test]
fn language_value_from_php_skips_nulls() {
    use crate::php::{PhpArray, PhpValue};

    assert_eq!(LanguageValue::from_php(&PhpValue::Null), None);
    assert_eq!(
        LanguageValue::from_php(&PhpValue::Int(3)),
        Some(scalar("3"))
    );

    let mut array = PhpArray::new();
    array.push(PhpValue::Str("a".to_string()));
    array.push(PhpValue::Null);
    let value = LanguageValue::from_php(&PhpValue::Array(array)).unwrap();
    assert_eq!(value, plural(&[(0, "a")]));
    assert!(value.is_plural_forms());
}
