use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

/// Stored database value of a choice.
pub type ChoiceValue = i64;

/// Arbitrary metadata value attached to a choice.
pub type MetaValue = serde_json::Value;

/// Free-form metadata carried by a choice, keyed by string.
pub type Meta = BTreeMap<String, MetaValue>;

///
/// Choice
///
/// A single enumerated value: the integer stored in the database, a
/// human-readable label and optional metadata.
///
/// Equality, ordering and hashing only look at the value, so a `Choice`
/// behaves like its integer wherever it is compared, sorted or hashed.
/// `name` stays unset until the choice is declared inside a `ChoiceSet`.
///

#[derive(Clone, Debug, Deref, Deserialize, Serialize)]
pub struct Choice {
    #[deref]
    value: ChoiceValue,

    label: String,

    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    meta: Meta,

    // only a set builder names a choice, never decoding
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Choice {
    ///
    /// CONSTRUCTORS
    ///

    /// Create a choice without metadata.
    #[must_use]
    pub fn new(value: ChoiceValue, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            meta: Meta::new(),
            name: None,
        }
    }

    /// Create a choice with metadata.
    ///
    /// ```ignore
    /// Choice::with_meta(2, "Inactive", [("external_system_name", "ina")]);
    /// ```
    #[must_use]
    pub fn with_meta<I, K, V>(value: ChoiceValue, label: impl Into<String>, meta: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetaValue>,
    {
        Self {
            value,
            label: label.into(),
            meta: meta
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            name: None,
        }
    }

    // The set builder is the only place a name is handed out.
    pub(crate) fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn value(&self) -> ChoiceValue {
        self.value
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Mutable access to this copy's metadata.
    pub const fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    /// Identifier the choice was declared under, once it belongs to a set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn meta_value(&self, key: &str) -> Option<&MetaValue> {
        self.meta.get(key)
    }

    /// Returns `true` if `key` is present in the metadata and maps to `value`.
    /// A missing key never matches, not even `MetaValue::Null`.
    /// Numbers compare numerically, so `1` matches `1.0`.
    #[must_use]
    pub fn has_meta(&self, key: &str, value: &MetaValue) -> bool {
        self.meta.get(key).is_some_and(|v| meta_value_eq(v, value))
    }
}

#[allow(clippy::float_cmp)]
fn meta_value_eq(a: &MetaValue, b: &MetaValue) -> bool {
    match (a, b) {
        (MetaValue::Number(x), MetaValue::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x == y
            } else {
                x.as_f64() == y.as_f64()
            }
        }
        _ => a == b,
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl PartialEq for Choice {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Choice {}

impl PartialOrd for Choice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Choice {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Choice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialEq<ChoiceValue> for Choice {
    fn eq(&self, other: &ChoiceValue) -> bool {
        self.value == *other
    }
}

impl PartialEq<Choice> for ChoiceValue {
    fn eq(&self, other: &Choice) -> bool {
        *self == other.value
    }
}

impl PartialOrd<ChoiceValue> for Choice {
    fn partial_cmp(&self, other: &ChoiceValue) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl PartialOrd<Choice> for ChoiceValue {
    fn partial_cmp(&self, other: &Choice) -> Option<Ordering> {
        Some(self.cmp(&other.value))
    }
}

impl From<&Choice> for ChoiceValue {
    fn from(choice: &Choice) -> Self {
        choice.value
    }
}

impl From<Choice> for ChoiceValue {
    fn from(choice: Choice) -> Self {
        choice.value
    }
}

///
/// TESTS
///
