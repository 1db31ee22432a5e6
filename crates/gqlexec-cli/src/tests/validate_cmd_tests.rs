use super::*;
use std::process::ExitCode;

#[tokio::test]
async fn validates_a_directory_of_schema_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "query.graphql", "type Query { me: User }");
    write_file(dir.path(), "user.graphqls", "type User { name: String }");
    write_file(dir.path(), "README.md", "not graphql");

    let result = run_cli([
        "gqlexec".to_string(), "validate".to_string(), path_arg(dir.path()),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert!(result.stderr.is_none());
    let stdout = result.stdout.expect("stdout");
    assert!(stdout.contains("Analyzed 2 files."), "{stdout}");
    assert!(stdout.contains("Skipped 1 non-graphql files."), "{stdout}");
    // Query, User, and the five built-in scalars.
    assert!(stdout.contains("Validated 7 type definitions."), "{stdout}");
    assert!(stdout.contains("Validated 2 directive definitions."), "{stdout}");
}

#[tokio::test]
async fn single_file_is_loaded_regardless_of_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(dir.path(), "schema.txt", BLOG_SDL);

    let result = run_cli(["gqlexec".to_string(), "validate".to_string(), path_arg(&path)]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert!(result.stdout.expect("stdout").contains("Analyzed 1 files."));
}

#[tokio::test]
async fn reports_schema_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "schema.graphql", "type Foo { bar: String }");

    let result = run_cli([
        "gqlexec".to_string(), "validate".to_string(), path_arg(dir.path()),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stdout.is_none());
    assert!(result.stderr.expect("stderr").contains("Errors validating schema"));
}

#[tokio::test]
async fn missing_path_is_a_scan_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");

    let result = run_cli(["gqlexec".to_string(), "validate".to_string(), path_arg(&missing)]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.expect("stderr").contains("Errors scanning input paths"));
}

#[tokio::test]
async fn directory_without_graphql_files_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "notes.txt", "hello");

    let result = run_cli([
        "gqlexec".to_string(), "validate".to_string(), path_arg(dir.path()),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.expect("stderr").contains("No GraphQL files found."));
}
