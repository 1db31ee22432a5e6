use crate::ast;
use crate::execution::RequestError;
use crate::operation::Operation;
use crate::operation::OperationKind;

fn parse(source: &str) -> ast::query::Document {
    ast::query::parse(source).expect("document parses")
}

#[test]
fn anonymous_shorthand_is_selected() {
    let doc = parse("{ hello }");

    let op = Operation::select(&doc, None).expect("operation is selected");

    assert_eq!(op.kind(), OperationKind::Query);
    assert_eq!(op.name(), None);
    assert_eq!(op.selection_set().items.len(), 1);
    assert!(op.variable_definitions().is_empty());
}

#[test]
fn single_named_operation_is_selected_without_a_name() {
    let doc = parse("mutation Save($id: ID!) { save(id: $id) }");

    let op = Operation::select(&doc, None).expect("operation is selected");

    assert_eq!(op.kind(), OperationKind::Mutation);
    assert_eq!(op.name(), Some("Save"));
    assert_eq!(op.variable_definitions().len(), 1);
}

#[test]
fn named_operation_is_selected_among_many() {
    let doc = parse("
        query First { a }
        query Second { b }
        fragment F on Query { c }
    ");

    let op = Operation::select(&doc, Some("Second")).expect("operation is selected");

    assert_eq!(op.name(), Some("Second"));
}

#[test]
fn multiple_operations_without_a_name_are_ambiguous() {
    let doc = parse("query First { a } query Second { b }");

    assert_eq!(
        Operation::select(&doc, None).err(),
        Some(RequestError::AmbiguousOperation),
    );
}

#[test]
fn unknown_operation_name_fails() {
    let doc = parse("query First { a }");

    let err = Operation::select(&doc, Some("Third")).err();

    assert_eq!(
        err,
        Some(RequestError::UnknownOperation {
            operation_name: "Third".to_string(),
        }),
    );
    assert_eq!(
        err.map(|err| err.to_string()),
        Some("Unknown operation named \"Third\".".to_string()),
    );
}

#[test]
fn fragments_alone_are_not_an_operation() {
    let doc = parse("fragment F on Query { a }");

    assert_eq!(
        Operation::select(&doc, None).err(),
        Some(RequestError::NoOperation),
    );
}

#[test]
fn subscription_kind_is_reported() {
    let doc = parse("subscription Ticks { tick }");

    let op = Operation::select(&doc, None).expect("operation is selected");

    assert_eq!(op.kind(), OperationKind::Subscription);
    assert_eq!(op.kind().to_string(), "subscription");
}
