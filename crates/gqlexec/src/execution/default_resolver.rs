use crate::execution::FieldResult;
use crate::execution::Member;
use crate::execution::RawValue;
use crate::execution::ResolveParams;

/// Resolution for fields that have no explicit resolver: look up a member
/// with the field's exact name on the source value.
///
/// A plain member is returned as-is; a getter is invoked with no arguments; a
/// method is invoked with the field's params. Missing members, and sources
/// that are neither maps nor [`ObjectSource`](crate::ObjectSource)s, resolve
/// to null.
pub(super) fn resolve_by_member(params: &ResolveParams<'_>) -> FieldResult<RawValue> {
    match params.source.member(params.info.field_name) {
        Some(Member::Value(value)) => Ok(value),
        Some(Member::Getter(getter_fn)) => getter_fn(),
        Some(Member::Method(method_fn)) => method_fn(params),
        None => Ok(RawValue::Null),
    }
}
