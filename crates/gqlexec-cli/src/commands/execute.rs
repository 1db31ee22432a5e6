use crate::graphql_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlexec::ast;
use gqlexec::schema::SchemaBuilder;
use gqlexec::ExecuteParams;
use gqlexec::ExecutionResult;
use gqlexec::ExecutionStrategy;
use gqlexec::RawValue;
use gqlexec::Value;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(
        help="JSON file holding the root value the query's top-level fields \
             are resolved against.",
        long,
    )]
    pub data: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(help="Name of the operation to execute.", long)]
    pub operation_name: Option<String>,

    #[arg(
        help="Resolve sibling fields concurrently.",
        long,
    )]
    pub parallel: bool,

    #[arg(help="File containing the query document to execute.", long)]
    pub query: PathBuf,

    #[arg(
        help="Paths to one or more GraphQL SDL files or directories \
             containing them.",
        long,
        num_args=1..,
        required=true,
    )]
    pub schema: Vec<PathBuf>,

    #[arg(
        help="Abandon execution if it takes longer than this many \
             milliseconds.",
        long,
    )]
    pub timeout_ms: Option<u64>,

    #[arg(
        help="JSON file holding an object of variable values.",
        long,
    )]
    pub variables: Option<PathBuf>,
}
impl ExecuteCmd {
    async fn execute(self) -> anyhow::Result<ExecutionResult> {
        let found = graphql_files::find(&self.schema, &self.graphql_file_exts);
        if let Some(err) = found.errors.into_iter().next() {
            return Err(err).context("scanning schema paths");
        }
        anyhow::ensure!(
            !found.file_paths.is_empty(),
            "no GraphQL schema files found in {:?}",
            self.schema,
        );
        let schema =
            SchemaBuilder::new()
                .load_files(found.file_paths)
                .and_then(|builder| builder.build())
                .context("building schema")?;

        let query_src = read_file(&self.query)?;
        let document = ast::query::parse(&query_src)
            .with_context(|| format!("parsing query {:?}", self.query))?;

        let root_value = match &self.data {
            Some(path) => {
                let json: serde_json::Value = serde_json::from_str(&read_file(path)?)
                    .with_context(|| format!("parsing data {path:?}"))?;
                RawValue::from(json)
            },
            None => RawValue::Null,
        };

        let variable_values = match &self.variables {
            Some(path) => serde_json::from_str::<IndexMap<String, Value>>(&read_file(path)?)
                .with_context(|| format!("parsing variables {path:?}"))?,
            None => IndexMap::new(),
        };

        let strategy =
            if self.parallel {
                ExecutionStrategy::Parallel
            } else {
                ExecutionStrategy::Serial
            };
        let operation_name = self.operation_name;

        let timeout = self.timeout_ms.map(Duration::from_millis);
        run_abandonable(timeout, move || {
            let mut params = ExecuteParams::new(&schema, &document)
                .with_root_value(root_value)
                .with_strategy(strategy)
                .with_variable_values(variable_values);
            if let Some(operation_name) = operation_name {
                params = params.with_operation_name(operation_name);
            }
            gqlexec::execute(params)
        }).await
    }
}

/// Run `job` on its own detached thread and wait for its result.
///
/// On timeout the thread is left to finish on its own and its result is
/// dropped. Nothing waits on it, so neither the runtime nor the process
/// stays alive for it.
pub(crate) async fn run_abandonable<T, F>(
    timeout: Option<Duration>,
    job: F,
) -> anyhow::Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = tokio::sync::oneshot::channel();
    std::thread::Builder::new()
        .name("gqlexec-execute".to_string())
        .spawn(move || {
            // The receiver is gone once the caller has timed out.
            let _ = sender.send(job());
        })
        .context("spawning execution thread")?;

    let result = match timeout {
        Some(timeout) => tokio::time::timeout(timeout, receiver)
            .await
            .with_context(|| format!(
                "execution timed out after {}ms",
                timeout.as_millis(),
            ))?,
        None => receiver.await,
    };
    result.context("execution thread exited without a result")
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let result = match self.execute().await {
            Ok(result) => result,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let json = match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize result: {err}",
                output_utils::RED_X,
            )),
        };

        if result.is_ok() {
            CommandResult::stdout(format_args!("{json}"))
        } else {
            CommandResult::stdout_with_failure(format_args!("{json}"))
        }
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading {path:?}"))
}
