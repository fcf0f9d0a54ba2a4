use crate::finding::{Findings, MessageId};
use crate::php::{PhpValue, render_value};

use super::FileValidator;
use super::key::KeyValidator;

const SYNONYMS_VARIABLE: &str = "synonyms";
const WORDS_VARIABLE: &str = "words";

impl<K: KeyValidator> FileValidator<K> {
    /// `search_synonyms.php`: `$synonyms` maps strings to strings. Numeric
    /// keys end up as integers and are reported too.
    pub(super) fn validate_synonyms(&self, file: &str, source: &str, findings: &mut Findings) {
        let Some(evaluation) = Self::evaluate_candidate(file, source, findings) else {
            return;
        };
        let Some(synonyms) = Self::declared_array(&evaluation, SYNONYMS_VARIABLE, file, true, findings)
        else {
            return;
        };

        for (word, synonym) in synonyms {
            if word.is_int() || !matches!(synonym, PhpValue::Str(_)) {
                findings.fail(
                    MessageId::SearchInvalidSynonymTypes,
                    file,
                    vec![render_value(&word.as_value()), render_value(synonym)],
                );
            }
        }
    }

    /// `search_ignore_words.php`: `$words` holds only strings.
    pub(super) fn validate_ignore_words(
        &self,
        file: &str,
        source: &str,
        findings: &mut Findings,
    ) {
        let Some(evaluation) = Self::evaluate_candidate(file, source, findings) else {
            return;
        };
        let Some(words) = Self::declared_array(&evaluation, WORDS_VARIABLE, file, true, findings)
        else {
            return;
        };

        for word in words.values() {
            if !matches!(word, PhpValue::Str(_)) {
                findings.fail(MessageId::SearchInvalidWordType, file, vec![render_value(word)]);
            }
        }
    }
}
