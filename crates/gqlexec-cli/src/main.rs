mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn log_level_from_env(env_val: Option<&str>) -> (tracing::Level, Option<String>) {
    match env_val {
        Some("DEBUG" | "debug") => (tracing::Level::DEBUG, None),
        Some("INFO" | "info") => (tracing::Level::INFO, None),
        Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
        Some("VERBOSE" | "verbose") => (tracing::Level::DEBUG, None),
        Some(other) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{other}`")),
        ),
        None => (DEFAULT_LOG_LEVEL, None),
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            let env_val =
                std::env::var("LOG_LEVEL")
                    .map(|s| s.trim().to_string())
                    .ok();
            log_level_from_env(env_val.as_deref())
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests;
