use crate::graphql_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlexec::schema::SchemaBuilder;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = graphql_files::find(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );

        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors scanning input paths: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }
        if found.file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found.",
                output_utils::RED_X,
            ));
        }

        let schema =
            SchemaBuilder::new()
                .load_files(found.file_paths.iter().collect::<Vec<_>>())
                .and_then(|builder| builder.build());

        match schema {
            Ok(schema) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Validated {} type definitions.\n",
                    "  * Validated {} directive definitions.",
                ),
                output_utils::GREEN_CHECK,
                found.file_paths.len(),
                found.num_skipped_files,
                schema.type_map().len(),
                schema.directives().len(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
