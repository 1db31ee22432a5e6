use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectTypeConfig;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectTypeConfig;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use crate::types::TypeId;
use pretty_assertions::assert_eq;

fn validate_input_object(arena: &TypeArena, type_id: TypeId) -> Vec<TypeValidationError> {
    let input_obj = arena.get(type_id).and_then(GraphQLType::as_input_object).unwrap();
    InputObjectTypeValidator::new(input_obj, arena).validate()
}

#[test]
fn basic_flat_input_object_type_validates() {
    let mut arena = TypeArena::new();
    let type_id = arena.add_input_object(
        InputObjectTypeConfig::new("TestInputObject")
            .with_field("field1", InputField::new(TypeId::INT))
            .with_field("field2", InputField::new(TypeAnnotation::non_null(TypeId::INT))),
    );

    assert_eq!(validate_input_object(&arena, type_id), vec![]);
}

#[test]
fn input_object_without_fields_is_rejected() {
    let mut arena = TypeArena::new();
    let type_id = arena.add_input_object(InputObjectTypeConfig::new("Empty"));

    assert_eq!(validate_input_object(&arena, type_id), vec![
        TypeValidationError::TypeWithNoFields {
            type_name: "Empty".to_string(),
        },
    ]);
}

#[test]
fn input_field_with_output_type_is_rejected() {
    let mut arena = TypeArena::new();
    let author_id = arena.add_object(
        ObjectTypeConfig::new("Author").with_field("name", Field::new(TypeId::STRING)),
    );
    let type_id = arena.add_input_object(
        InputObjectTypeConfig::new("ArticleFilter")
            .with_field("author", InputField::new(author_id)),
    );

    assert_eq!(validate_input_object(&arena, type_id), vec![
        TypeValidationError::InvalidInputFieldWithOutputType {
            field_name: "author".to_string(),
            invalid_type_name: "Author".to_string(),
            parent_type_name: "ArticleFilter".to_string(),
        },
    ]);
}

mod cycles {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_recursive_input_object_field_validates() {
        let mut arena = TypeArena::new();
        let inner_id = arena.add_input_object(
            InputObjectTypeConfig::new("Inner")
                .with_field("value", InputField::new(TypeAnnotation::non_null(TypeId::INT))),
        );
        let outer_id = arena.add_input_object(
            InputObjectTypeConfig::new("Outer")
                .with_field("inner", InputField::new(TypeAnnotation::non_null(inner_id))),
        );

        assert_eq!(validate_input_object(&arena, outer_id), vec![]);
    }

    #[test]
    fn nullable_self_reference_validates() {
        let mut arena = TypeArena::new();
        let type_id = arena.add_input_object(
            InputObjectTypeConfig::new("Node")
                .with_field("value", InputField::new(TypeId::INT)),
        );
        arena.add_input_field_config(type_id, "next", InputField::new(type_id));

        assert_eq!(validate_input_object(&arena, type_id), vec![]);
    }

    #[test]
    fn non_null_list_self_reference_validates() {
        let mut arena = TypeArena::new();
        let type_id = arena.add_input_object(
            InputObjectTypeConfig::new("Node")
                .with_field("value", InputField::new(TypeId::INT)),
        );
        arena.add_input_field_config(
            type_id,
            "children",
            InputField::new(TypeAnnotation::non_null(TypeAnnotation::list(
                TypeAnnotation::non_null(type_id),
            ))),
        );

        assert_eq!(validate_input_object(&arena, type_id), vec![]);
    }

    #[test]
    fn non_null_self_reference_is_rejected() {
        let mut arena = TypeArena::new();
        let type_id = arena.add_input_object(
            InputObjectTypeConfig::new("Node")
                .with_field("value", InputField::new(TypeId::INT)),
        );
        arena.add_input_field_config(
            type_id,
            "next",
            InputField::new(TypeAnnotation::non_null(type_id)),
        );

        assert_eq!(validate_input_object(&arena, type_id), vec![
            TypeValidationError::CircularInputFieldChain {
                circular_field_path: vec![
                    "Node.next".to_string(),
                    "Node".to_string(),
                ],
            },
        ]);
    }

    #[test]
    fn non_null_two_type_cycle_is_rejected() {
        let mut arena = TypeArena::new();
        let a_id = arena.add_input_object(InputObjectTypeConfig::new("A"));
        let b_id = arena.add_input_object(
            InputObjectTypeConfig::new("B")
                .with_field("a", InputField::new(TypeAnnotation::non_null(a_id))),
        );
        arena.add_input_field_config(a_id, "b", InputField::new(TypeAnnotation::non_null(b_id)));

        assert_eq!(validate_input_object(&arena, a_id), vec![
            TypeValidationError::CircularInputFieldChain {
                circular_field_path: vec![
                    "A.b".to_string(),
                    "B".to_string(),
                    "B.a".to_string(),
                    "A".to_string(),
                ],
            },
        ]);
    }

    #[test]
    fn cycle_not_through_starting_type_is_reported_only_by_its_members() {
        let mut arena = TypeArena::new();
        let b_id = arena.add_input_object(
            InputObjectTypeConfig::new("B")
                .with_field("value", InputField::new(TypeId::INT)),
        );
        arena.add_input_field_config(b_id, "b", InputField::new(TypeAnnotation::non_null(b_id)));
        let a_id = arena.add_input_object(
            InputObjectTypeConfig::new("A")
                .with_field("b", InputField::new(TypeAnnotation::non_null(b_id))),
        );

        assert_eq!(validate_input_object(&arena, a_id), vec![]);
        assert_eq!(validate_input_object(&arena, b_id).len(), 1);
    }
}
