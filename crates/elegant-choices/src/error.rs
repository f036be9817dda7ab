use crate::choice::{ChoiceValue, MetaValue};
use thiserror::Error as ThisError;

///
/// ChoiceError
///
/// Root error for everything raised by choice sets.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ChoiceError {
    #[error(transparent)]
    Missing(#[from] MissingChoiceError),
}

///
/// MissingChoiceError
///
/// A lookup against a choice set found nothing.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum MissingChoiceError {
    /// No choice carries `key` mapped to `value` in its metadata.
    #[error("{} is not an available choice!", render_meta_value(.value))]
    MetaValue { key: String, value: MetaValue },

    #[error("{value} is not an available choice!")]
    Value { value: ChoiceValue },

    #[error("{name} is not a declared choice")]
    Name { name: String },
}

impl MissingChoiceError {
    /// Construct a metadata lookup miss.
    pub fn meta_value(key: impl Into<String>, value: MetaValue) -> Self {
        Self::MetaValue {
            key: key.into(),
            value,
        }
    }
}

// strings are shown bare, everything else as json
fn render_meta_value(value: &MetaValue) -> String {
    match value {
        MetaValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

///
/// TESTS
///
