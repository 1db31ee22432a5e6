pub(crate) mod execute;
mod validate;

use crate::Cli;
use crate::CommandResult;
pub(crate) use execute::ExecuteCmd;
pub(crate) use validate::ValidateCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Execute a query document against a schema.
    Execute(Box<ExecuteCmd>),

    /// Load and validate a schema from GraphQL SDL files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Execute(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
