mod cli;
mod error;
mod inputs;
mod logging;
mod runner;
mod settings;

use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

use athena_executor_athena::AthenaConnector;

use crate::cli::{CliArgs, EXAMPLE_CONFIG};
use crate::error::{RunError, EXIT_INVALID_INPUT};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    eprintln!("\n{EXAMPLE_CONFIG}");
                    ExitCode::from(EXIT_INVALID_INPUT)
                }
            };
        }
    };

    // Holds the file writer open until every message has been flushed.
    let mut log_guard: Option<WorkerGuard> = None;

    match run(&args, &mut log_guard).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: &CliArgs, log_guard: &mut Option<WorkerGuard>) -> Result<(), RunError> {
    inputs::validate_input_files(&args.sql_file, &args.config_file)?;
    let config = inputs::load_configuration(&args.config_file)?;

    *log_guard = settings::apply(&config)?;
    info!(path = %args.config_file.display(), "Configuration loaded");

    let connector =
        AthenaConnector::new().with_query_timeout(Duration::from_secs(args.query_timeout));
    runner::execute_script(&connector, &config, &args.sql_file).await?;

    Ok(())
}

fn report(err: &RunError) {
    // Validation happens before logging is installed, so fall back to stderr.
    if tracing::dispatcher::has_been_set() {
        error!(error = %err, exit_code = err.exit_code(), "Execution aborted");
    } else {
        eprintln!("Error: {err}");
    }

    if err.exit_code() == EXIT_INVALID_INPUT {
        eprintln!("\n{}", CliArgs::command().render_usage());
        eprintln!("\n{EXAMPLE_CONFIG}");
    }
}
