use super::*;
use crate::commands::execute::run_abandonable;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::process::ExitCode;
use std::time::Duration;
use std::time::Instant;

const BLOG_DATA: &str = r#"{
    "article": {
        "id": "1",
        "title": "Hello",
        "author": { "name": "Ann" }
    },
    "feed": [
        { "id": "1", "title": "Hello" },
        { "id": "2", "title": "World" }
    ]
}"#;

struct Fixture {
    dir: tempfile::TempDir,
}
impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "schema.graphql", BLOG_SDL);
        write_file(dir.path(), "data.json", BLOG_DATA);
        Self { dir }
    }

    fn file(&self, name: &str, contents: &str) -> String {
        path_arg(&write_file(self.dir.path(), name, contents))
    }

    fn path(&self, name: &str) -> String {
        path_arg(&self.dir.path().join(name))
    }

    fn args(&self, query: &str, extra: &[&str]) -> Vec<String> {
        let mut args = vec![
            "gqlexec".to_string(),
            "execute".to_string(),
            "--schema".to_string(),
            self.path("schema.graphql"),
            "--query".to_string(),
            self.file("query.graphql", query),
            "--data".to_string(),
            self.path("data.json"),
        ];
        args.extend(extra.iter().map(|arg| arg.to_string()));
        args
    }
}

fn stdout_json(result: CommandResult) -> serde_json::Value {
    let stdout = result.stdout.expect("stdout");
    serde_json::from_str(&stdout).expect("stdout is json")
}

#[tokio::test]
async fn prints_execution_result_as_json() {
    let fixture = Fixture::new();
    let result = run_cli(fixture.args(
        "{ article(id: \"1\") { title author { name } } feed { id } }",
        &[],
    )).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert_eq!(stdout_json(result), json!({
        "data": {
            "article": {
                "title": "Hello",
                "author": { "name": "Ann" },
            },
            "feed": [{ "id": "1" }, { "id": "2" }],
        },
    }));
}

#[tokio::test]
async fn parallel_strategy_prints_the_same_result() {
    let fixture = Fixture::new();
    let query = "{ feed { id title } article { author { name } } }";

    let serial = stdout_json(run_cli(fixture.args(query, &[])).await);
    let parallel = stdout_json(run_cli(fixture.args(query, &["--parallel"])).await);

    assert_eq!(serial, parallel);
}

#[tokio::test]
async fn selects_operation_by_name_and_applies_variables() {
    let fixture = Fixture::new();
    let variables = fixture.file("vars.json", r#"{ "id": "1" }"#);
    let result = run_cli(fixture.args(
        "query One($id: ID) { article(id: $id) { id } } \
         query Two { feed { title } }",
        &["--operation-name", "Two", "--variables", variables.as_str()],
    )).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert_eq!(stdout_json(result), json!({
        "data": {
            "feed": [{ "title": "Hello" }, { "title": "World" }],
        },
    }));
}

#[tokio::test]
async fn field_errors_are_printed_and_fail_the_command() {
    let fixture = Fixture::new();
    write_file(
        fixture.dir.path(),
        "data.json",
        r#"{ "article": { "author": { "name": null } } }"#,
    );
    let result = run_cli(fixture.args("{ article { author { name } } }", &[])).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert_eq!(stdout_json(result), json!({
        "data": {
            "article": { "author": null },
        },
        "errors": [{
            "message": "Cannot return null for non-nullable field Author.name.",
            "locations": [{ "line": 1, "column": 22 }],
            "path": ["article", "author", "name"],
        }],
    }));
}

#[tokio::test]
async fn request_errors_print_null_data() {
    let fixture = Fixture::new();
    let result = run_cli(fixture.args(
        "{ feed { id } }",
        &["--operation-name", "Missing"],
    )).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert_eq!(stdout_json(result), json!({
        "data": null,
        "errors": [{ "message": "Unknown operation named \"Missing\"." }],
    }));
}

#[tokio::test]
async fn generous_timeout_does_not_interfere() {
    let fixture = Fixture::new();
    let result = run_cli(fixture.args("{ feed { id } }", &["--timeout-ms", "60000"])).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
}

#[tokio::test]
async fn expired_timeout_abandons_the_running_job() {
    let started = Instant::now();
    let result = run_abandonable(Some(Duration::from_millis(20)), || {
        std::thread::sleep(Duration::from_secs(30));
        "finished"
    }).await;

    let err = result.expect_err("job outlives the timeout");
    assert!(err.to_string().contains("execution timed out after 20ms"));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn job_result_is_returned_without_a_timeout() {
    let result = run_abandonable(None, || 7).await;

    assert_eq!(result.expect("job result"), 7);
}

#[tokio::test]
async fn panicking_job_is_reported_as_an_error() {
    let result = run_abandonable(None, || -> u32 { panic!("resolver blew up") }).await;

    let err = result.expect_err("panicked job has no result");
    assert!(err.to_string().contains("exited without a result"));
}

#[tokio::test]
async fn unparsable_query_is_reported_on_stderr() {
    let fixture = Fixture::new();
    let result = run_cli(fixture.args("{ feed { id ", &[])).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stdout.is_none());
    assert!(result.stderr.expect("stderr").contains("parsing query"));
}

#[tokio::test]
async fn missing_data_file_is_reported_on_stderr() {
    let fixture = Fixture::new();
    let mut args = fixture.args("{ feed { id } }", &[]);
    let data_arg = args.len() - 1;
    args[data_arg] = fixture.path("missing.json");

    let result = run_cli(args).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.expect("stderr").contains("reading"));
}

#[tokio::test]
async fn invalid_schema_is_reported_on_stderr() {
    let fixture = Fixture::new();
    write_file(fixture.dir.path(), "schema.graphql", "type Article { id: ID }");

    let result = run_cli(fixture.args("{ feed { id } }", &[])).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.expect("stderr").contains("building schema"));
}
