use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// One failed cross-type validation rule. Schema construction collects every
/// such error before failing with
/// [`SchemaBuildError::TypeValidationErrors`](crate::schema::SchemaBuildError::TypeValidationErrors).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{non_interface_type_name}`, but `{non_interface_type_name}` is not \
        an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input object type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "{interface_name}.{field_name}({parameter_name}:) expects type \
        \"{expected_parameter_type}\" but \
        {type_name}.{field_name}({parameter_name}:) provides type \
        \"{invalid_parameter_type}\"."
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        expected_parameter_type: String,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: String,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "{interface_name}.{field_name} expects type \"{expected_field_type}\" \
        but {type_name}.{field_name} provides type \"{invalid_field_type}\"."
    )]
    InvalidInterfaceSpecifiedFieldType {
        expected_field_type: String,
        field_name: String,
        interface_name: String,
        invalid_field_type: String,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter on `{parent_type_name}.{field_name}` was \
        declared with the `{outputonly_type_name}` type, which is not an \
        input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        field_name: String,
        outputonly_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but this type is a {} type \
        and union members can only be object types.",
        member_type_kind.name(),
    )]
    InvalidUnionMemberTypeKind {
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "\"{interface_name}\" expects field \"{field_name}\" but \
        \"{type_name}\" does not provide it."
    )]
    MissingInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "{interface_name}.{field_name} expects argument \
        \"{missing_parameter_name}\" but {type_name}.{field_name} does not \
        provide it."
    )]
    MissingInterfaceSpecifiedFieldParameter {
        field_name: String,
        interface_name: String,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` type must define one or more fields")]
    TypeWithNoFields {
        type_name: String,
    },

    #[error(
        "{type_name}.{field_name} declares argument \"{parameter_name}\" \
        which is not declared by {interface_name}.{field_name}; arguments of \
        interface-specified fields must match the interface exactly."
    )]
    UnexpectedAdditionalParameterOnInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        parameter_name: String,
        type_name: String,
    },

    #[error("The `{union_type_name}` union type must define one or more members")]
    UnionWithNoMembers {
        union_type_name: String,
    },
}
