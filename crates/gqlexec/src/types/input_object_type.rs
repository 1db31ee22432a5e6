use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// stored in a [`TypeArena`](crate::types::TypeArena).
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
}
impl InputObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from FieldName -> [`InputField`], in the order fields were added.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Authoring description of an [`InputObjectType`], consumed by
/// [`TypeArena::add_input_object()`](crate::types::TypeArena::add_input_object).
#[derive(Clone, Debug)]
pub struct InputObjectTypeConfig {
    pub(super) description: Option<String>,
    pub(super) fields: Vec<(String, InputField)>,
    pub(super) name: String,
}
impl InputObjectTypeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: vec![],
            name: name.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(
        mut self,
        name: impl Into<String>,
        field: InputField,
    ) -> Self {
        self.fields.push((name.into(), field));
        self
    }
}
