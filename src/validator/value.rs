use crate::php::{ArrayKey, PhpValue};

/// A translated value: a plain string, or an ordered collection of values
/// used for plural forms and context variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageValue {
    Scalar(String),
    Sequence(Vec<(ArrayKey, LanguageValue)>),
}

impl LanguageValue {
    /// Convert an evaluated value. `None` for null, which counts as unset.
    /// Numbers and booleans take their string form.
    #[must_use]
    pub fn from_php(value: &PhpValue) -> Option<Self> {
        match value {
            PhpValue::Null => None,
            PhpValue::Array(array) => Some(Self::Sequence(
                array
                    .iter()
                    .filter_map(|(key, value)| Self::from_php(value).map(|v| (key.clone(), v)))
                    .collect(),
            )),
            scalar => Some(Self::Scalar(scalar.to_php_string())),
        }
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "string",
            Self::Sequence(_) => "array",
        }
    }

    /// Sequence keyed only by integers, i.e. plural forms.
    #[must_use]
    pub fn is_plural_forms(&self) -> bool {
        match self {
            Self::Sequence(entries) => entries.iter().all(|(key, _)| key.is_int()),
            Self::Scalar(_) => false,
        }
    }

    #[must_use]
    pub fn get(&self, key: &ArrayKey) -> Option<&Self> {
        match self {
            Self::Sequence(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            Self::Scalar(_) => None,
        }
    }

    /// All string leaves, depth first.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Scalar(text) => out.push(text),
            Self::Sequence(entries) => {
                for (_, value) in entries {
                    value.collect_texts(out);
                }
            }
        }
    }
}

impl From<&str> for LanguageValue {
    fn from(text: &str) -> Self {
        Self::Scalar(text.to_string())
    }
}
