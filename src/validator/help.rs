use crate::finding::{Findings, MessageId};
use crate::php::{ArrayKey, PhpValue, render_value};

use super::FileValidator;
use super::key::KeyValidator;

const VARIABLE: &str = "help";
const COLUMN_BREAK: &str = "--";

/// A `[headline, description]` pair with both positions set.
fn is_valid_entry(entry: &PhpValue) -> bool {
    entry.as_array().is_some_and(|pair| {
        pair.len() == 2
            && [0, 1].iter().all(|i| {
                pair.get(&ArrayKey::Int(*i))
                    .is_some_and(|value| !value.is_null())
            })
    })
}

fn is_column_break(entry: &PhpValue) -> bool {
    entry.as_array().is_some_and(|pair| {
        [0, 1].iter().all(|i| {
            pair.get(&ArrayKey::Int(*i))
                .and_then(PhpValue::as_str)
                == Some(COLUMN_BREAK)
        })
    })
}

impl<K: KeyValidator> FileValidator<K> {
    /// Help files: a `$help` list of `[headline, description]` pairs with
    /// exactly one `['--', '--']` column break. There is no reference
    /// comparison for this kind.
    pub(super) fn validate_help(&self, file: &str, source: &str, findings: &mut Findings) {
        let Some(evaluation) = Self::evaluate_candidate(file, source, findings) else {
            return;
        };
        let Some(help) = Self::declared_array(&evaluation, VARIABLE, file, true, findings) else {
            return;
        };

        let mut column_breaks = 0usize;
        for entry in help.values() {
            if !is_valid_entry(entry) {
                findings.fail(MessageId::HelpInvalidEntry, file, vec![render_value(entry)]);
            } else if is_column_break(entry) {
                column_breaks += 1;
            }
        }

        if column_breaks != 1 {
            findings.fail(
                MessageId::HelpColumnBreak,
                file,
                vec![column_breaks.to_string()],
            );
        }
    }
}
