use crate::execution::RawValue;
use crate::execution::ResolveInfo;
use crate::types::ResolveTypeFn;
use crate::types::TypeId;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) stored in a
/// [`TypeArena`](crate::types::TypeArena).
#[derive(Clone, Debug)]
pub struct UnionType {
    pub(super) description: Option<String>,
    pub(super) members: Vec<TypeId>,
    pub(super) name: String,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}
impl UnionType {
    /// The description of this [`UnionType`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Ids of each member type, in the order members were specified.
    pub fn members(&self) -> &[TypeId] {
        &self.members
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}

/// Authoring description of a [`UnionType`], consumed by
/// [`TypeArena::add_union()`](crate::types::TypeArena::add_union).
#[derive(Clone, Debug)]
pub struct UnionTypeConfig {
    pub(super) description: Option<String>,
    pub(super) members: Vec<TypeId>,
    pub(super) name: String,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}
impl UnionTypeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            members: vec![],
            name: name.into(),
            resolve_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_member(mut self, member_id: TypeId) -> Self {
        self.members.push(member_id);
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
