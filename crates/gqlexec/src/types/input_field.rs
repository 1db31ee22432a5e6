use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    default_value: Option<Value>,
    description: Option<String>,
    type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn new(type_annotation: impl Into<TypeAnnotation>) -> Self {
        Self {
            default_value: None,
            description: None,
            type_annotation: type_annotation.into(),
        }
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
