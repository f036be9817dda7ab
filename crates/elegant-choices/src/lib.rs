//! Labelled, metadata-bearing enumerations for use as choice fields in web
//! application models: a sorted list of choices, an index by stored value,
//! `(value, label)` iteration and lookup by metadata.

#[macro_use]
mod macros;

pub mod choice;
pub mod declare;
pub mod error;
pub mod set;

pub use choice::{Choice, ChoiceValue, Meta, MetaValue};
pub use declare::{ChoiceRef, Choices};
pub use error::{ChoiceError, MissingChoiceError};
pub use set::{ChoiceSet, ChoiceSetBuilder, ChoicesByValue, Pairs};

///
/// Prelude
///
/// Everything needed to declare and query choices.
///

pub mod prelude {
    pub use crate::{
        choice::{Choice, ChoiceValue},
        choices,
        declare::Choices,
        set::ChoiceSet,
    };
}
