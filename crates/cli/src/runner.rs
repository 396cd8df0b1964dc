//! Sequential execution of a script against one session.

use std::path::Path;

use athena_executor_core::{Configuration, Connector, SqlSession, Statement};
use tracing::{error, info};

use crate::error::RunError;
use crate::inputs;

/// Characters of each statement shown in the progress log.
const PREVIEW_CHARS: usize = 100;

/// Run `statements` in order, stopping at the first failure.
///
/// Returns the number of statements executed. Indexes in logs and errors are
/// 1-based.
pub async fn run_statements<S>(session: &S, statements: &[Statement]) -> Result<usize, RunError>
where
    S: SqlSession + ?Sized,
{
    let total = statements.len();
    info!(total, "Statements found in script");

    for (i, statement) in statements.iter().enumerate() {
        let index = i + 1;
        info!(
            index,
            total,
            statement = %statement.preview(PREVIEW_CHARS),
            "Executing statement"
        );

        match session.execute(statement).await {
            Ok(outcome) => info!(index, outcome = %outcome, "Statement executed successfully"),
            Err(source) => {
                error!(index, error = %source, "Statement failed");
                return Err(RunError::Execution { index, source });
            }
        }
    }

    info!(total, "All statements executed successfully");
    Ok(total)
}

/// Decompose the SQL file, open a session and run every statement.
///
/// The script is read before connecting so an unreadable file never costs a
/// session.
pub async fn execute_script<C>(
    connector: &C,
    config: &Configuration,
    sql_file: &Path,
) -> Result<usize, RunError>
where
    C: Connector,
{
    let statements = inputs::read_script(sql_file)?;

    info!(connection = %config.connection_info(), "Connecting to Athena");
    let session = connector.connect(config).await.map_err(|e| {
        error!(error = %e, "Connection failed");
        RunError::Connection(e)
    })?;

    run_statements(&session, &statements).await
}
