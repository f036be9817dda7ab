use crate::{
    choice::{Choice, ChoiceValue, MetaValue},
    error::MissingChoiceError,
    set::ChoiceSet,
};

impl ChoiceSet {
    /// Return the first choice (in value order) whose metadata maps
    /// `meta_key` to `meta_value`. Numbers compare by numeric value.
    ///
    /// ```ignore
    /// let found = status.get_choice_by_meta_value("external_system_name", "ina")?;
    /// assert_eq!(found.name(), Some("INACTIVE"));
    /// ```
    pub fn get_choice_by_meta_value(
        &self,
        meta_key: &str,
        meta_value: impl Into<MetaValue>,
    ) -> Result<&Choice, MissingChoiceError> {
        let meta_value = meta_value.into();

        match self
            .choices
            .iter()
            .find(|choice| choice.has_meta(meta_key, &meta_value))
        {
            Some(choice) => Ok(choice),
            None => Err(MissingChoiceError::meta_value(meta_key, meta_value)),
        }
    }

    /// Look a choice up by its stored value.
    pub fn get(&self, value: ChoiceValue) -> Result<&Choice, MissingChoiceError> {
        self.choices_by_value()
            .get(value)
            .ok_or(MissingChoiceError::Value { value })
    }

    /// Look a choice up by the identifier it was declared under.
    pub fn by_name(&self, name: &str) -> Result<&Choice, MissingChoiceError> {
        self.choices
            .iter()
            .find(|choice| choice.name() == Some(name))
            .ok_or_else(|| MissingChoiceError::Name {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn label_for(&self, value: ChoiceValue) -> Option<&str> {
        self.choices_by_value().get(value).map(Choice::label)
    }
}
