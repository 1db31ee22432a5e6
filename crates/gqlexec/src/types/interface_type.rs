use crate::execution::RawValue;
use crate::execution::ResolveInfo;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ResolveTypeFn;
use crate::types::TypeId;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// stored in a [`TypeArena`](crate::types::TypeArena).
#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(super) data: ObjectOrInterfaceTypeData,
    pub(super) implementations: Vec<TypeId>,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}
impl InterfaceType {
    /// Ids of every object type that declared it implements this interface,
    /// in the order those declarations were made.
    pub fn implementations(&self) -> &[TypeId] {
        &self.implementations
    }

    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The description of this [`InterfaceType`].
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    /// Look up a single [`Field`] by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in the order they were added.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    // The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.data.name()
    }
}

/// Authoring description of an [`InterfaceType`], consumed by
/// [`TypeArena::add_interface()`](crate::types::TypeArena::add_interface).
#[derive(Clone, Debug)]
pub struct InterfaceTypeConfig {
    pub(super) description: Option<String>,
    pub(super) fields: Vec<(String, Field)>,
    pub(super) name: String,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}
impl InterfaceTypeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: vec![],
            name: name.into(),
            resolve_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    pub fn with_resolve_type<F>(mut self, resolve_type_fn: F) -> Self
    where
        F: Fn(&RawValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type = Some(ResolveTypeFn::new(resolve_type_fn));
        self
    }
}
