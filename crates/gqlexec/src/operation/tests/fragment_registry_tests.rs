use crate::ast;
use crate::operation::FragmentRegistry;
use graphql_parser::query::TypeCondition;

fn parse(source: &str) -> ast::query::Document {
    ast::query::parse(source).expect("document parses")
}

#[test]
fn empty_document_has_no_fragments() {
    let doc = parse("{ a }");

    let fragments = FragmentRegistry::from_document(&doc);

    assert!(fragments.is_empty());
    assert!(fragments.get("F").is_none());
}

#[test]
fn fragments_are_found_by_name() {
    let doc = parse("
        { ...UserParts }
        fragment UserParts on User { name }
        fragment PostParts on Post { title }
    ");

    let fragments = FragmentRegistry::from_document(&doc);

    assert_eq!(fragments.len(), 2);
    let TypeCondition::On(on_type) = &fragments.get("PostParts")
        .expect("fragment is registered")
        .type_condition;
    assert_eq!(on_type, "Post");
}

#[test]
fn first_definition_of_a_name_wins() {
    let doc = parse("
        { ...Parts }
        fragment Parts on User { name }
        fragment Parts on Post { title }
    ");

    let fragments = FragmentRegistry::from_document(&doc);

    assert_eq!(fragments.len(), 1);
    let TypeCondition::On(on_type) = &fragments.get("Parts")
        .expect("fragment is registered")
        .type_condition;
    assert_eq!(on_type, "User");
}
