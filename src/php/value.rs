use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Key of an array entry. Decimal integer strings are stored as `Int`,
/// matching how the host language normalises array keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    /// Build a key from a string, normalising canonical decimal integers.
    #[must_use]
    pub fn from_string(s: &str) -> Self {
        if is_canonical_int(s)
            && let Ok(n) = s.parse::<i64>()
        {
            return Self::Int(n);
        }
        Self::Str(s.to_string())
    }

    /// Convert an evaluated value into a key, or `None` if the value cannot
    /// be used as one (arrays).
    #[must_use]
    pub fn from_value(value: &PhpValue) -> Option<Self> {
        match value {
            PhpValue::Null => Some(Self::Str(String::new())),
            PhpValue::Bool(b) => Some(Self::Int(i64::from(*b))),
            PhpValue::Int(n) => Some(Self::Int(*n)),
            #[allow(clippy::cast_possible_truncation)]
            PhpValue::Float(f) => Some(Self::Int(f.trunc() as i64)),
            PhpValue::Str(s) => Some(Self::from_string(s)),
            PhpValue::Array(_) => None,
        }
    }

    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    #[must_use]
    pub fn as_value(&self) -> PhpValue {
        match self {
            Self::Int(n) => PhpValue::Int(*n),
            Self::Str(s) => PhpValue::Str(s.clone()),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

fn is_canonical_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // "0" is canonical, "-0" and leading zeros are not
    if digits.starts_with('0') {
        return s == "0";
    }
    true
}

/// A value produced by evaluating a data file.
#[derive(Debug, Clone, PartialEq)]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(PhpArray),
}

impl PhpValue {
    /// Type name as reported by the host language's `gettype`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "double",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&PhpArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness used by `if`, `!` and `empty()`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0,
            Self::Str(s) => !(s.is_empty() || s == "0"),
            Self::Array(array) => !array.is_empty(),
        }
    }

    /// String conversion used by concatenation and `echo`.
    #[must_use]
    pub fn to_php_string(&self) -> String {
        match self {
            Self::Null | Self::Bool(false) => String::new(),
            Self::Bool(true) => "1".to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => format_float(*f),
            Self::Str(s) => s.clone(),
            Self::Array(_) => "Array".to_string(),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

impl Serialize for PhpValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Array(array) => array.serialize(serializer),
        }
    }
}

/// Insertion ordered array with integer and string keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhpArray {
    entries: IndexMap<ArrayKey, PhpValue>,
    next_index: i64,
}

impl PhpArray {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: ArrayKey, value: PhpValue) {
        if let ArrayKey::Int(n) = key
            && n >= self.next_index
        {
            self.next_index = n.saturating_add(1);
        }
        self.entries.insert(key, value);
    }

    /// Append with the next free integer key.
    pub fn push(&mut self, value: PhpValue) {
        let key = ArrayKey::Int(self.next_index);
        self.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: &ArrayKey) -> Option<&PhpValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &ArrayKey) -> Option<&mut PhpValue> {
        self.entries.get_mut(key)
    }

    /// Mutable slot for `key` (or the next free index), created as `Null`
    /// when absent.
    pub fn slot_mut(&mut self, key: Option<ArrayKey>) -> &mut PhpValue {
        let key = key.unwrap_or(ArrayKey::Int(self.next_index));
        if let ArrayKey::Int(n) = key
            && n >= self.next_index
        {
            self.next_index = n.saturating_add(1);
        }
        self.entries.entry(key).or_insert(PhpValue::Null)
    }

    pub fn remove(&mut self, key: &ArrayKey) -> Option<PhpValue> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, ArrayKey, PhpValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, ArrayKey, PhpValue> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, ArrayKey, PhpValue> {
        self.entries.values()
    }

    /// Whether keys are exactly `0..len` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .zip(0_i64..)
            .all(|(key, i)| *key == ArrayKey::Int(i))
    }

    /// `array_merge` semantics: integer keys of `other` are renumbered and
    /// appended, string keys overwrite.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            match key {
                ArrayKey::Int(_) => self.push(value.clone()),
                ArrayKey::Str(_) => self.insert(key.clone(), value.clone()),
            }
        }
    }
}

impl<'a> IntoIterator for &'a PhpArray {
    type Item = (&'a ArrayKey, &'a PhpValue);
    type IntoIter = indexmap::map::Iter<'a, ArrayKey, PhpValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for PhpArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

/// Render a value for embedding in a finding message.
#[must_use]
pub fn render_value(value: &PhpValue) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_php_string())
}
