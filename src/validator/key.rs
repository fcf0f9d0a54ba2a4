use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use crate::finding::{Findings, MessageId};

use super::value::LanguageValue;

/// Compares one reference entry against its translation.
///
/// Called for every key present in both files; implementations push their
/// findings and never fail.
pub trait KeyValidator: Send + Sync {
    fn validate(
        &self,
        file: &str,
        key: &str,
        reference: &LanguageValue,
        candidate: &LanguageValue,
        findings: &mut Findings,
    );
}

/// Default key validator: value shape, printf placeholders, template
/// variables and HTML tags.
pub struct PlaceholderKeyValidator {
    printf: Regex,
    template_var: Regex,
    html_tag: Regex,
}

impl Default for PlaceholderKeyValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderKeyValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            printf: Regex::new(r"%%|%(?:(\d+)\$)?[-+0]*\d*(?:\.\d+)?([sdfuxX])")
                .expect("Invalid regex"),
            template_var: Regex::new(r"\{[A-Z][A-Z0-9_]*\}").expect("Invalid regex"),
            html_tag: Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^<>]*>").expect("Invalid regex"),
        }
    }

    /// Placeholders keyed by (argument position, conversion), keeping the
    /// first spelling seen. Unnumbered ones take positions 1, 2… in order
    /// within each text, so `%s %s` and `%2$s %1$s` are the same set.
    fn printf_placeholders<'a>(&self, texts: &[&'a str]) -> IndexMap<(usize, char), &'a str> {
        let mut placeholders = IndexMap::new();
        for &text in texts {
            let mut next_position = 0;
            for caps in self.printf.captures_iter(text) {
                let Some(conversion) = caps.get(2).and_then(|m| m.as_str().chars().next()) else {
                    continue;
                };
                let position = match caps.get(1).and_then(|m| m.as_str().parse().ok()) {
                    Some(position) => position,
                    None => {
                        next_position += 1;
                        next_position
                    }
                };
                placeholders
                    .entry((position, conversion))
                    .or_insert_with(|| caps.get(0).map_or("", |m| m.as_str()));
            }
        }
        placeholders
    }

    fn template_vars<'a>(&self, texts: &[&'a str]) -> IndexSet<&'a str> {
        texts
            .iter()
            .flat_map(|text| self.template_var.find_iter(text))
            .map(|m| m.as_str())
            .collect()
    }

    /// Tags normalised to `<name>` / `</name>`, attributes dropped.
    fn html_tags(&self, texts: &[&str]) -> IndexSet<String> {
        texts
            .iter()
            .flat_map(|text| self.html_tag.captures_iter(text))
            .map(|caps| format!("<{}{}>", &caps[1], caps[2].to_ascii_lowercase()))
            .collect()
    }

    fn compare(
        &self,
        file: &str,
        key: &str,
        reference: &LanguageValue,
        candidate: &LanguageValue,
        findings: &mut Findings,
    ) {
        match (reference, candidate) {
            (LanguageValue::Scalar(_), LanguageValue::Scalar(_)) => {
                self.compare_texts(file, key, &reference.texts(), &candidate.texts(), findings);
            }
            (LanguageValue::Sequence(_), LanguageValue::Sequence(_))
                if reference.is_plural_forms() && candidate.is_plural_forms() =>
            {
                // Languages differ in their number of plural forms, so only
                // the union of all forms is compared
                self.compare_texts(file, key, &reference.texts(), &candidate.texts(), findings);
            }
            (LanguageValue::Sequence(ref_entries), LanguageValue::Sequence(cand_entries)) => {
                for (sub_key, ref_value) in ref_entries {
                    let path = format!("{key}.{sub_key}");
                    match candidate.get(sub_key) {
                        Some(cand_value) => {
                            self.compare(file, &path, ref_value, cand_value, findings);
                        }
                        None => findings.fail(MessageId::MissingKey, file, vec![path]),
                    }
                }
                for (sub_key, _) in cand_entries {
                    if reference.get(sub_key).is_none() {
                        findings.fail(MessageId::ExtraKey, file, vec![format!("{key}.{sub_key}")]);
                    }
                }
            }
            _ => findings.fail(
                MessageId::KeyInvalidType,
                file,
                vec![key.to_string(), reference.kind_name().to_string()],
            ),
        }
    }

    fn compare_texts(
        &self,
        file: &str,
        key: &str,
        reference: &[&str],
        candidate: &[&str],
        findings: &mut Findings,
    ) {
        let ref_printf = self.printf_placeholders(reference);
        let cand_printf = self.printf_placeholders(candidate);
        let additional = join(
            cand_printf
                .iter()
                .filter(|(slot, _)| !ref_printf.contains_key(*slot))
                .map(|(_, spelling)| spelling),
        );
        if !additional.is_empty() {
            findings.fail(
                MessageId::KeyAdditionalPlaceholders,
                file,
                vec![key.to_string(), additional],
            );
        }
        let missing = join(
            ref_printf
                .iter()
                .filter(|(slot, _)| !cand_printf.contains_key(*slot))
                .map(|(_, spelling)| spelling),
        );
        if !missing.is_empty() {
            findings.warning(
                MessageId::KeyMissingPlaceholders,
                file,
                vec![key.to_string(), missing],
            );
        }

        let ref_vars = self.template_vars(reference);
        let cand_vars = self.template_vars(candidate);
        let additional = join(cand_vars.difference(&ref_vars));
        if !additional.is_empty() {
            findings.warning(
                MessageId::KeyAdditionalVars,
                file,
                vec![key.to_string(), additional],
            );
        }
        let missing = join(ref_vars.difference(&cand_vars));
        if !missing.is_empty() {
            findings.warning(
                MessageId::KeyMissingVars,
                file,
                vec![key.to_string(), missing],
            );
        }

        let ref_tags = self.html_tags(reference);
        let cand_tags = self.html_tags(candidate);
        let additional = join(cand_tags.difference(&ref_tags));
        if !additional.is_empty() {
            findings.fail(
                MessageId::KeyAdditionalHtml,
                file,
                vec![key.to_string(), additional],
            );
        }
    }
}

impl KeyValidator for PlaceholderKeyValidator {
    fn validate(
        &self,
        file: &str,
        key: &str,
        reference: &LanguageValue,
        candidate: &LanguageValue,
        findings: &mut Findings,
    ) {
        self.compare(file, key, reference, candidate, findings);
    }
}

fn join<T: AsRef<str>>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
