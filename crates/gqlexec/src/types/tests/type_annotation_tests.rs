use crate::types::ObjectTypeConfig;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use crate::types::TypeId;
use proptest::prelude::*;

fn type_annotation() -> impl Strategy<Value = TypeAnnotation> {
    let leaf = prop_oneof![
        Just(TypeId::STRING),
        Just(TypeId::INT),
        Just(TypeId::BOOLEAN),
    ].prop_map(TypeAnnotation::named);

    leaf.prop_recursive(4, 16, 1, |inner| prop_oneof![
        inner.clone().prop_map(|of_type| TypeAnnotation::list(of_type)),
        inner.prop_map(|of_type| TypeAnnotation::non_null(of_type)),
    ])
}

mod is_equal_type {
    use super::*;

    #[test]
    fn identical_wrapping_is_equal() {
        let a = TypeAnnotation::non_null(TypeAnnotation::list(
            TypeAnnotation::non_null(TypeId::STRING),
        ));
        let b = TypeAnnotation::non_null(TypeAnnotation::list(
            TypeAnnotation::non_null(TypeId::STRING),
        ));

        assert!(a.is_equal_type(&b));
    }

    #[test]
    fn missing_non_null_is_not_equal() {
        let nullable = TypeAnnotation::named(TypeId::STRING);
        let non_null = TypeAnnotation::non_null(TypeId::STRING);

        assert!(!nullable.is_equal_type(&non_null));
        assert!(!non_null.is_equal_type(&nullable));
    }

    #[test]
    fn missing_list_is_not_equal() {
        let named = TypeAnnotation::named(TypeId::STRING);
        let list = TypeAnnotation::list(TypeId::STRING);

        assert!(!named.is_equal_type(&list));
        assert!(!list.is_equal_type(&named));
    }

    #[test]
    fn list_of_non_null_differs_from_non_null_list() {
        let list_of_non_null = TypeAnnotation::list(TypeAnnotation::non_null(TypeId::INT));
        let non_null_list = TypeAnnotation::non_null(TypeAnnotation::list(TypeId::INT));

        assert!(!list_of_non_null.is_equal_type(&non_null_list));
    }

    #[test]
    fn same_named_types_from_distinct_definitions_are_not_equal() {
        let mut arena = TypeArena::new();
        let first = arena.add_object(ObjectTypeConfig::new("Article"));
        let second = arena.add_object(ObjectTypeConfig::new("Article"));

        assert_eq!(arena.type_name(first), arena.type_name(second));
        assert!(!TypeAnnotation::named(first).is_equal_type(&TypeAnnotation::named(second)));
    }

    proptest! {
        #[test]
        fn is_reflexive(annot in type_annotation()) {
            prop_assert!(annot.is_equal_type(&annot.clone()));
        }

        #[test]
        fn is_symmetric(a in type_annotation(), b in type_annotation()) {
            prop_assert_eq!(a.is_equal_type(&b), b.is_equal_type(&a));
        }

        #[test]
        fn matches_structural_equality(a in type_annotation(), b in type_annotation()) {
            prop_assert_eq!(a.is_equal_type(&b), a == b);
        }

        #[test]
        fn extra_wrapping_is_never_equal(annot in type_annotation()) {
            prop_assert!(!TypeAnnotation::list(annot.clone()).is_equal_type(&annot));
            prop_assert!(!TypeAnnotation::non_null(annot.clone()).is_equal_type(&annot));
            prop_assert!(
                !TypeAnnotation::list(annot.clone())
                    .is_equal_type(&TypeAnnotation::non_null(annot))
            );
        }
    }
}

#[test]
fn innermost_type_id_unwraps_every_layer() {
    let annot = TypeAnnotation::non_null(TypeAnnotation::list(
        TypeAnnotation::list(TypeAnnotation::non_null(TypeId::FLOAT)),
    ));

    assert_eq!(annot.innermost_type_id(), TypeId::FLOAT);
}

#[test]
fn nullability() {
    assert!(TypeAnnotation::named(TypeId::ID).nullable());
    assert!(TypeAnnotation::list(TypeAnnotation::non_null(TypeId::ID)).nullable());
    assert!(TypeAnnotation::non_null(TypeAnnotation::list(TypeId::ID)).is_non_null());
}

#[test]
fn of_type_returns_wrapped_annotation() {
    let inner = TypeAnnotation::list(TypeId::BOOLEAN);
    let annot = TypeAnnotation::non_null(inner.clone());

    assert_eq!(annot.of_type(), Some(&inner));
    assert_eq!(TypeAnnotation::named(TypeId::BOOLEAN).of_type(), None);
}

#[test]
fn to_graphql_string_renders_wrappers() {
    let arena = TypeArena::new();
    let annot = TypeAnnotation::non_null(TypeAnnotation::list(
        TypeAnnotation::non_null(TypeId::STRING),
    ));

    assert_eq!(annot.to_graphql_string(&arena), "[String!]!");
    assert_eq!(TypeAnnotation::named(TypeId::ID).to_graphql_string(&arena), "ID");
}
