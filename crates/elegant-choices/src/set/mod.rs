//! Prepared choice sets: the sorted list, the value index and iteration
//! in the `(value, label)` shape web model fields expect.

mod builder;
mod lookup;

#[cfg(test)]
mod tests;

pub use builder::ChoiceSetBuilder;

use crate::choice::{Choice, ChoiceValue};
use serde::Serialize;
use std::{collections::BTreeMap, iter::FusedIterator, ops::Index, slice::Iter as SliceIter};

///
/// ChoiceSet
///
/// Immutable enumeration built once from a list of declared choices.
///
/// `choices` is sorted ascending by value (stable, so equal values keep
/// declaration order). The value index maps each value to its position in
/// `choices`; when two choices share a value the later one wins there,
/// while both stay in `choices`.
///

#[derive(Clone, Debug, Serialize)]
pub struct ChoiceSet {
    name: String,
    choices: Vec<Choice>,

    #[serde(skip)]
    by_value: BTreeMap<ChoiceValue, usize>,
}

impl ChoiceSet {
    /// Start declaring a new set called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ChoiceSetBuilder {
        ChoiceSetBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All declared choices, sorted by value.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub const fn choices_by_value(&self) -> ChoicesByValue<'_> {
        ChoicesByValue { set: self }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Iterate `(choice, label)` pairs in value order.
    #[must_use]
    pub fn iter(&self) -> Pairs<'_> {
        Pairs {
            iter: self.choices.iter(),
        }
    }

    /// Owned `(value, label)` pairs, ready for a model field's `choices`.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(ChoiceValue, String)> {
        self.iter()
            .map(|(choice, label)| (choice.value(), label.to_string()))
            .collect()
    }

    /// Values declared by more than one choice, ascending.
    #[must_use]
    pub fn duplicate_values(&self) -> Vec<ChoiceValue> {
        let mut dupes: Vec<ChoiceValue> = self
            .choices
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0].value())
            .collect();
        dupes.dedup();

        dupes
    }
}

impl<'a> IntoIterator for &'a ChoiceSet {
    type Item = (&'a Choice, &'a str);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// ChoicesByValue
///
/// Read-only view of a set's value index.
///

#[derive(Clone, Copy, Debug)]
pub struct ChoicesByValue<'a> {
    set: &'a ChoiceSet,
}

impl<'a> ChoicesByValue<'a> {
    #[must_use]
    pub fn get(&self, value: ChoiceValue) -> Option<&'a Choice> {
        let set = self.set;

        set.by_value.get(&value).map(|&index| &set.choices[index])
    }

    #[must_use]
    pub fn contains(&self, value: ChoiceValue) -> bool {
        self.set.by_value.contains_key(&value)
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.by_value.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.by_value.is_empty()
    }

    /// Iterate `(value, choice)` entries in ascending value order.
    pub fn iter(self) -> impl Iterator<Item = (ChoiceValue, &'a Choice)> {
        let set = self.set;

        set.by_value
            .iter()
            .map(move |(&value, &index)| (value, &set.choices[index]))
    }
}

impl Index<ChoiceValue> for ChoicesByValue<'_> {
    type Output = Choice;

    /// Panics if no choice carries `value`, like indexing a map.
    fn index(&self, value: ChoiceValue) -> &Self::Output {
        &self.set.choices[self.set.by_value[&value]]
    }
}

///
/// Pairs
///
/// Iterator over `(choice, label)` in value order.
///

#[derive(Clone, Debug)]
pub struct Pairs<'a> {
    iter: SliceIter<'a, Choice>,
}

impl<'a> Pairs<'a> {
    fn map_item(choice: &'a Choice) -> (&'a Choice, &'a str) {
        (choice, choice.label())
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a Choice, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Self::map_item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.iter.nth(n).map(Self::map_item)
    }
}

impl DoubleEndedIterator for Pairs<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Self::map_item)
    }
}

impl ExactSizeIterator for Pairs<'_> {}
impl FusedIterator for Pairs<'_> {}
