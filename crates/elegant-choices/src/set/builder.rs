use crate::{
    choice::{Choice, ChoiceValue},
    set::ChoiceSet,
};
use std::collections::BTreeMap;

///
/// ChoiceSetBuilder
///
/// Collects `(identifier, choice)` bindings in declaration order and
/// prepares them into a `ChoiceSet` in one step.
///

#[derive(Clone, Debug, Default)]
pub struct ChoiceSetBuilder {
    name: String,
    declared: Vec<(String, Choice)>,
}

impl ChoiceSetBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared: Vec::new(),
        }
    }

    /// Declare `choice` under the identifier `ident`.
    #[must_use]
    pub fn choice(mut self, ident: impl Into<String>, choice: Choice) -> Self {
        self.declared.push((ident.into(), choice));
        self
    }

    /// Declare several bindings at once, keeping their order.
    #[must_use]
    pub fn choices<I, S>(mut self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (S, Choice)>,
        S: Into<String>,
    {
        self.declared
            .extend(bindings.into_iter().map(|(ident, choice)| (ident.into(), choice)));
        self
    }

    /// Name every choice after its identifier, sort by value and index.
    #[must_use]
    pub fn build(self) -> ChoiceSet {
        let mut choices: Vec<Choice> = self
            .declared
            .into_iter()
            .map(|(ident, choice)| choice.named(ident))
            .collect();

        // stable: equal values keep declaration order
        choices.sort();

        let mut by_value: BTreeMap<ChoiceValue, usize> = BTreeMap::new();
        for (index, choice) in choices.iter().enumerate() {
            by_value.insert(choice.value(), index);
        }

        ChoiceSet {
            name: self.name,
            choices,
            by_value,
        }
    }
}

impl<S: Into<String>> Extend<(S, Choice)> for ChoiceSetBuilder {
    fn extend<I: IntoIterator<Item = (S, Choice)>>(&mut self, iter: I) {
        self.declared
            .extend(iter.into_iter().map(|(ident, choice)| (ident.into(), choice)));
    }
}
