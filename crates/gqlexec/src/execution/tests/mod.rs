mod blog_tests;
mod request_error_tests;

use crate::ast;
use crate::execution::execute;
use crate::execution::ExecuteParams;
use crate::execution::ExecutionResult;
use crate::execution::FieldResult;
use crate::execution::RawValue;
use crate::execution::ResolveParams;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::Value;
use indexmap::IndexMap;

fn parse(source: &str) -> ast::query::Document {
    ast::query::parse(source).expect("query parses")
}

fn sdl_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .and_then(|builder| builder.build())
        .expect("schema builds")
}

fn to_json(result: &ExecutionResult) -> serde_json::Value {
    serde_json::to_value(result).expect("result serializes")
}

/// The serialized result with error locations removed, for tests that only
/// care about messages and paths.
fn to_json_without_locations(result: &ExecutionResult) -> serde_json::Value {
    let mut json = to_json(result);
    if let Some(errors) = json.get_mut("errors").and_then(|errors| errors.as_array_mut()) {
        for error in errors {
            if let Some(error) = error.as_object_mut() {
                error.remove("locations");
            }
        }
    }
    json
}

fn run(schema: &Schema, query: &str, root_value: impl Into<RawValue>) -> ExecutionResult {
    let doc = parse(query);
    execute(ExecuteParams::new(schema, &doc).with_root_value(root_value))
}

fn variables(json: serde_json::Value) -> IndexMap<String, Value> {
    serde_json::from_value(json).expect("variables deserialize")
}

/// Resolves to the JSON encoding of the `input` argument, or null when the
/// argument is absent.
fn echo_input(params: &ResolveParams<'_>) -> FieldResult<RawValue> {
    match params.arg("input") {
        Some(value) => Ok(RawValue::from(serde_json::to_string(value)?)),
        None => Ok(RawValue::Null),
    }
}
