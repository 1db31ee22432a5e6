use crate::execution::FieldResult;
use crate::execution::RawValue;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use std::sync::Arc;

type ResolverFn = dyn Fn(&ResolveParams<'_>) -> FieldResult<RawValue> + Send + Sync;
type ResolveTypeFnInner = dyn Fn(&RawValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync;
type IsTypeOfFnInner = dyn Fn(&RawValue, &ResolveInfo<'_>) -> bool + Send + Sync;

/// Produces the raw value of a [`Field`](crate::types::Field) from its source
/// value and coerced arguments.
///
/// Fields without a resolver use default resolution: a same-named member is
/// looked up on the source value (see [`ObjectSource`](crate::ObjectSource)).
#[derive(Clone)]
pub struct Resolver(Arc<ResolverFn>);
impl Resolver {
    pub fn new<F>(resolver_fn: F) -> Self
    where
        F: Fn(&ResolveParams<'_>) -> FieldResult<RawValue> + Send + Sync + 'static,
    {
        Self(Arc::new(resolver_fn))
    }

    pub(crate) fn call(&self, params: &ResolveParams<'_>) -> FieldResult<RawValue> {
        (self.0)(params)
    }
}
impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Resolver(..)")
    }
}

/// Picks the concrete object type (by name) of a value whose declared type is
/// an interface or union.
#[derive(Clone)]
pub struct ResolveTypeFn(Arc<ResolveTypeFnInner>);
impl ResolveTypeFn {
    pub fn new<F>(resolve_type_fn: F) -> Self
    where
        F: Fn(&RawValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(resolve_type_fn))
    }

    pub(crate) fn call(
        &self,
        value: &RawValue,
        info: &ResolveInfo<'_>,
    ) -> Option<String> {
        (self.0)(value, info)
    }
}
impl std::fmt::Debug for ResolveTypeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ResolveTypeFn(..)")
    }
}

/// Reports whether a raw value belongs to an object type.
#[derive(Clone)]
pub struct IsTypeOfFn(Arc<IsTypeOfFnInner>);
impl IsTypeOfFn {
    pub fn new<F>(is_type_of_fn: F) -> Self
    where
        F: Fn(&RawValue, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(is_type_of_fn))
    }

    pub(crate) fn call(&self, value: &RawValue, info: &ResolveInfo<'_>) -> bool {
        (self.0)(value, info)
    }
}
impl std::fmt::Debug for IsTypeOfFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IsTypeOfFn(..)")
    }
}
