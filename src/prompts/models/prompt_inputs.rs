use indexmap::IndexMap;
use serde::Deserialize;

use super::field_value::FieldValue;

/// Field name to value, in the order the form sent them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PromptInputs(IndexMap<String, FieldValue>);

impl PromptInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// The value of the first key in `aliases` that is filled in.
    pub fn first_present(&self, aliases: &[&str]) -> Option<&FieldValue> {
        aliases
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| value.is_present())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}
