use crate::{
    choice::{Choice, ChoiceValue, MetaValue},
    error::MissingChoiceError,
    set::{ChoiceSet, ChoicesByValue, Pairs},
};
use std::{
    fmt::{self, Debug, Display},
    marker::PhantomData,
    ops::Deref,
};

///
/// Choices
///
/// Implemented by types declared with `choices!`. Everything is served from
/// a single `ChoiceSet` prepared the first time it is needed.
///

pub trait Choices {
    /// The prepared set backing this declaration.
    fn choice_set() -> &'static ChoiceSet;

    fn choices() -> &'static [Choice] {
        Self::choice_set().choices()
    }

    fn choices_by_value() -> ChoicesByValue<'static> {
        Self::choice_set().choices_by_value()
    }

    fn get_choice_by_meta_value(
        meta_key: &str,
        meta_value: impl Into<MetaValue>,
    ) -> Result<&'static Choice, MissingChoiceError> {
        Self::choice_set().get_choice_by_meta_value(meta_key, meta_value)
    }

    fn get(value: ChoiceValue) -> Result<&'static Choice, MissingChoiceError> {
        Self::choice_set().get(value)
    }

    fn by_name(name: &str) -> Result<&'static Choice, MissingChoiceError> {
        Self::choice_set().by_name(name)
    }

    fn iter() -> Pairs<'static> {
        Self::choice_set().iter()
    }

    fn to_pairs() -> Vec<(ChoiceValue, String)> {
        Self::choice_set().to_pairs()
    }
}

///
/// ChoiceRef
///
/// Typed handle to one declared choice, emitted by `choices!` as an
/// associated constant. Compares like its value and dereferences to the
/// prepared `Choice`.
///

pub struct ChoiceRef<C> {
    value: ChoiceValue,
    ident: &'static str,
    marker: PhantomData<fn() -> C>,
}

impl<C> ChoiceRef<C> {
    #[doc(hidden)]
    #[must_use]
    pub const fn new(value: ChoiceValue, ident: &'static str) -> Self {
        Self {
            value,
            ident,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn value(self) -> ChoiceValue {
        self.value
    }

    /// Identifier the choice is declared under.
    #[must_use]
    pub const fn ident(self) -> &'static str {
        self.ident
    }
}

impl<C: Choices> ChoiceRef<C> {
    /// The prepared choice this handle names.
    #[must_use]
    pub fn get(self) -> &'static Choice {
        match C::by_name(self.ident) {
            Ok(choice) => choice,
            // handles only come from the declaration that also built the set
            Err(err) => unreachable!("{err}"),
        }
    }
}

impl<C: Choices> Deref for ChoiceRef<C> {
    type Target = Choice;

    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<C> Clone for ChoiceRef<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ChoiceRef<C> {}

impl<C> Debug for ChoiceRef<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceRef")
            .field("ident", &self.ident)
            .field("value", &self.value)
            .finish()
    }
}

impl<C> Display for ChoiceRef<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<C> PartialEq for ChoiceRef<C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C> Eq for ChoiceRef<C> {}

impl<C> PartialEq<ChoiceValue> for ChoiceRef<C> {
    fn eq(&self, other: &ChoiceValue) -> bool {
        self.value == *other
    }
}

impl<C> PartialEq<ChoiceRef<C>> for ChoiceValue {
    fn eq(&self, other: &ChoiceRef<C>) -> bool {
        *self == other.value
    }
}

impl<C> PartialEq<Choice> for ChoiceRef<C> {
    fn eq(&self, other: &Choice) -> bool {
        self.value == other.value()
    }
}

impl<C> From<ChoiceRef<C>> for ChoiceValue {
    fn from(choice: ChoiceRef<C>) -> Self {
        choice.value
    }
}
