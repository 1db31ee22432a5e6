use crate::execution::FieldResult;
use crate::execution::RawValue;
use crate::execution::ResolveParams;
use crate::types::Resolver;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub struct Field {
    arguments: IndexMap<String, Argument>,
    description: Option<String>,
    pub(super) duplicate_argument_names: Vec<String>,
    resolver: Option<Resolver>,
    type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(type_annotation: impl Into<TypeAnnotation>) -> Self {
        Self {
            arguments: IndexMap::new(),
            description: None,
            duplicate_argument_names: vec![],
            resolver: None,
            type_annotation: type_annotation.into(),
        }
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        argument: Argument,
    ) -> Self {
        let name = name.into();
        if self.arguments.contains_key(&name) {
            self.duplicate_argument_names.push(name);
        } else {
            self.arguments.insert(name, argument);
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a resolver. Without one the field uses default resolution
    /// against its parent's source value.
    pub fn with_resolver<F>(mut self, resolver_fn: F) -> Self
    where
        F: Fn(&ResolveParams<'_>) -> FieldResult<RawValue> + Send + Sync + 'static,
    {
        self.resolver = Some(Resolver::new(resolver_fn));
        self
    }

    /// The arguments defined on this field, in definition order.
    pub fn arguments(&self) -> &IndexMap<String, Argument> {
        &self.arguments
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    pub(crate) fn set_resolver(&mut self, resolver: Resolver) {
        self.resolver = Some(resolver);
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// An argument accepted by a [`Field`].
#[derive(Clone, Debug)]
pub struct Argument {
    default_value: Option<Value>,
    description: Option<String>,
    type_annotation: TypeAnnotation,
}
impl Argument {
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
