use crate::schema::TypeValidationError;
use crate::types::Argument;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectTypeConfig;
use crate::types::InterfaceTypeConfig;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::ObjectTypeConfig;
use crate::types::TypeArena;
use crate::types::TypeId;
use crate::types::UnionTypeConfig;
use pretty_assertions::assert_eq;

fn validate_object(arena: &TypeArena, type_id: TypeId) -> Vec<TypeValidationError> {
    let object = arena.get(type_id).and_then(GraphQLType::as_object).unwrap();
    ObjectOrInterfaceTypeValidator::for_object(object, arena).validate()
}

#[test]
fn object_with_scalar_fields_validates() {
    let mut arena = TypeArena::new();
    let type_id = arena.add_object(
        ObjectTypeConfig::new("Article")
            .with_field("id", Field::new(TypeId::ID))
            .with_field("title", Field::new(TypeId::STRING)),
    );

    assert_eq!(validate_object(&arena, type_id), vec![]);
}

#[test]
fn object_without_fields_is_rejected() {
    let mut arena = TypeArena::new();
    let type_id = arena.add_object(ObjectTypeConfig::new("Empty"));

    assert_eq!(validate_object(&arena, type_id), vec![
        TypeValidationError::TypeWithNoFields {
            type_name: "Empty".to_string(),
        },
    ]);
}

#[test]
fn interface_without_fields_is_rejected() {
    let mut arena = TypeArena::new();
    let type_id = arena.add_interface(InterfaceTypeConfig::new("Empty"));
    let iface = arena.get(type_id).and_then(GraphQLType::as_interface).unwrap();

    assert_eq!(
        ObjectOrInterfaceTypeValidator::for_interface(iface, &arena).validate(),
        vec![TypeValidationError::TypeWithNoFields {
            type_name: "Empty".to_string(),
        }],
    );
}

#[test]
fn output_field_with_input_object_type_is_rejected() {
    let mut arena = TypeArena::new();
    let filter_id = arena.add_input_object(
        InputObjectTypeConfig::new("Filter")
            .with_field("term", InputField::new(TypeId::STRING)),
    );
    let type_id = arena.add_object(
        ObjectTypeConfig::new("Query")
            .with_field("filter", Field::new(filter_id)),
    );

    assert_eq!(validate_object(&arena, type_id), vec![
        TypeValidationError::InvalidOutputFieldWithInputType {
            field_name: "filter".to_string(),
            input_type_name: "Filter".to_string(),
            parent_type_name: "Query".to_string(),
        },
    ]);
}

#[test]
fn argument_with_output_type_is_rejected() {
    let mut arena = TypeArena::new();
    let author_id = arena.add_object(
        ObjectTypeConfig::new("Author")
            .with_field("name", Field::new(TypeId::STRING)),
    );
    let type_id = arena.add_object(
        ObjectTypeConfig::new("Query").with_field(
            "articles",
            Field::new(TypeId::STRING)
                .with_argument("by", Argument::new(author_id)),
        ),
    );

    assert_eq!(validate_object(&arena, type_id), vec![
        TypeValidationError::InvalidParameterWithOutputOnlyType {
            field_name: "articles".to_string(),
            outputonly_type_name: "Author".to_string(),
            parameter_name: "by".to_string(),
            parent_type_name: "Query".to_string(),
        },
    ]);
}

#[test]
fn implementing_a_non_interface_is_rejected() {
    let mut arena = TypeArena::new();
    let a_id = arena.add_object(
        ObjectTypeConfig::new("A").with_field("id", Field::new(TypeId::ID)),
    );
    let union_id = arena.add_union(UnionTypeConfig::new("U").with_member(a_id));
    let type_id = arena.add_object(
        ObjectTypeConfig::new("B")
            .with_interface(union_id)
            .with_field("id", Field::new(TypeId::ID)),
    );

    assert_eq!(validate_object(&arena, type_id), vec![
        TypeValidationError::ImplementsNonInterfaceType {
            type_name: "B".to_string(),
            non_interface_type_name: "U".to_string(),
        },
    ]);
}

#[test]
fn all_errors_are_accumulated() {
    let mut arena = TypeArena::new();
    let node_id = arena.add_interface(
        InterfaceTypeConfig::new("Node").with_field("id", Field::new(TypeId::ID)),
    );
    let filter_id = arena.add_input_object(
        InputObjectTypeConfig::new("Filter")
            .with_field("term", InputField::new(TypeId::STRING)),
    );
    let type_id = arena.add_object(
        ObjectTypeConfig::new("Thing")
            .with_interface(node_id)
            .with_field("filter", Field::new(filter_id)),
    );

    assert_eq!(validate_object(&arena, type_id).len(), 2);
}
