use crate::types::GraphQLTypeKind;
use crate::types::TypeId;
use thiserror::Error;

/// An error detected while a type was being authored into a
/// [`TypeArena`](crate::types::TypeArena).
///
/// Definition errors are recorded on the offending type rather than returned
/// immediately. They surface (and fail schema construction) once the type is
/// reached from a schema root.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeDefinitionError {
    #[error(
        "Multiple arguments named `{argument_name}` were defined on the \
        `{type_name}.{field_name}` field"
    )]
    DuplicateArgumentName {
        argument_name: String,
        field_name: String,
        type_name: String,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldName {
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements the type with id \
        {interface_id} more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        interface_id: TypeId,
        type_name: String,
    },

    #[error(
        "The `{type_name}` union specifies the type with id {member_id} as a \
        member more than once"
    )]
    DuplicateUnionMember {
        member_id: TypeId,
        type_name: String,
    },

    #[error(
        "Names must start with `_` or a letter and contain only `_`, letters, \
        and digits: `{name}` does not"
    )]
    InvalidName {
        name: String,
    },

    #[error("Names must not start with `__`: `{name}` does")]
    InvalidDunderPrefixedName {
        name: String,
    },

    #[error(
        "Cannot {operation} on `{type_name}` because it is a {} type",
        kind.name(),
    )]
    UnsupportedOperationForTypeKind {
        kind: GraphQLTypeKind,
        operation: &'static str,
        type_name: String,
    },

    #[error("No type with id {type_id} exists in this type arena")]
    UnknownTypeId {
        type_id: TypeId,
    },
}
