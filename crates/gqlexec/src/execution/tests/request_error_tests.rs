use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn hello_schema() -> Schema {
    sdl_schema("type Query { hello: String }")
}

fn request_error(query: &str, operation_name: Option<&str>) -> serde_json::Value {
    let schema = hello_schema();
    let doc = parse(query);
    let mut params = ExecuteParams::new(&schema, &doc)
        .with_root_value(json!({ "hello": "world" }));
    if let Some(operation_name) = operation_name {
        params = params.with_operation_name(operation_name);
    }
    to_json(&execute(params))
}

fn single_error(message: &str) -> serde_json::Value {
    json!({ "data": null, "errors": [{ "message": message }] })
}

#[test]
fn named_operation_is_executed() {
    assert_eq!(
        request_error("query A { a: hello } query B { b: hello }", Some("B")),
        json!({ "data": { "b": "world" } }),
    );
}

#[test]
fn multiple_operations_require_a_name() {
    assert_eq!(
        request_error("query A { hello } query B { hello }", None),
        single_error("Must provide operation name if query contains multiple operations."),
    );
}

#[test]
fn unknown_operation_name_fails() {
    assert_eq!(
        request_error("query A { hello }", Some("C")),
        single_error("Unknown operation named \"C\"."),
    );
}

#[test]
fn document_without_operations_fails() {
    assert_eq!(
        request_error("fragment F on Query { hello }", None),
        single_error("Must provide an operation."),
    );
}

#[test]
fn subscriptions_are_not_executed() {
    assert_eq!(
        request_error("subscription { hello }", None),
        single_error("Subscription operations are not supported."),
    );
}
