use crate::error::Result;
use crate::finding::{Findings, MessageId};
use crate::php::{PhpArray, PhpValue};

use super::FileValidator;
use super::key::KeyValidator;
use super::value::LanguageValue;

const VARIABLE: &str = "lang";

impl<K: KeyValidator> FileValidator<K> {
    /// Language array files: one `$lang` array, no output, and the same keys
    /// as the reference with every shared key handed to the key validator.
    pub(super) fn validate_lang(
        &self,
        file: &str,
        source: &str,
        findings: &mut Findings,
    ) -> Result<()> {
        let Some(evaluation) = Self::evaluate_candidate(file, source, findings) else {
            return Ok(());
        };
        let Some(candidate) = Self::declared_array(&evaluation, VARIABLE, file, false, findings)
        else {
            return Ok(());
        };
        Self::check_output(&evaluation, file, findings);

        let reference_eval = self.evaluate_reference(file)?;
        let empty = PhpArray::new();
        let reference = reference_eval
            .binding(VARIABLE)
            .and_then(PhpValue::as_array)
            .unwrap_or(&empty);

        for (key, ref_value) in reference {
            // Null counts as unset on either side
            let Some(cand_value) = candidate.get(key).and_then(LanguageValue::from_php) else {
                findings.fail(MessageId::MissingKey, file, vec![key.to_string()]);
                continue;
            };
            if let Some(ref_value) = LanguageValue::from_php(ref_value) {
                self.key_validator
                    .validate(file, &key.to_string(), &ref_value, &cand_value, findings);
            }
        }

        for key in candidate.keys() {
            if reference.get(key).is_none_or(PhpValue::is_null) {
                findings.fail(MessageId::ExtraKey, file, vec![key.to_string()]);
            }
        }

        Ok(())
    }
}
