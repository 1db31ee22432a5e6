use crate::execution::RawValue;
use crate::execution::ResolveInfo;
use crate::types::Field;
use crate::types::IsTypeOfFn;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeId;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) stored in
/// a [`TypeArena`](crate::types::TypeArena).
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(super) data: ObjectOrInterfaceTypeData,
    pub(super) interfaces: Vec<TypeId>,
    pub(super) is_type_of: Option<IsTypeOfFn>,
}
impl ObjectType {
    /// Ids of the interfaces this object declares that it implements, in
    /// declaration order.
    pub fn interfaces(&self) -> &[TypeId] {
        &self.interfaces
    }

    pub fn is_type_of(&self) -> Option<&IsTypeOfFn> {
        self.is_type_of.as_ref()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`].
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    /// Look up a single [`Field`] by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// order in which fields were added, including fields attached later via
    /// [`TypeArena::add_field_config()`](crate::types::TypeArena::add_field_config).
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.data.name()
    }
}

/// Authoring description of an [`ObjectType`], consumed by
/// [`TypeArena::add_object()`](crate::types::TypeArena::add_object).
#[derive(Clone, Debug)]
pub struct ObjectTypeConfig {
    pub(super) description: Option<String>,
    pub(super) fields: Vec<(String, Field)>,
    pub(super) interfaces: Vec<TypeId>,
    pub(super) is_type_of: Option<IsTypeOfFn>,
    pub(super) name: String,
}
impl ObjectTypeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: vec![],
            interfaces: vec![],
            is_type_of: None,
            name: name.into(),
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

    pub fn with_interface(mut self, interface_id: TypeId) -> Self {
        self.interfaces.push(interface_id);
        self
    }

    pub fn with_is_type_of<F>(mut self, is_type_of_fn: F) -> Self
    where
        F: Fn(&RawValue, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    {
        self.is_type_of = Some(IsTypeOfFn::new(is_type_of_fn));
        self
    }
}
