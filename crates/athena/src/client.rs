//! AWS Athena statement execution.
//!
//! Provides [`AthenaSession`], which runs one statement at a time against
//! Athena with exponential-backoff polling, timeout enforcement and
//! cancellation, and reports what the statement produced.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use aws_sdk_athena::types::{QueryExecutionState, StatementType};
use tracing::{debug, error, info, warn};

use athena_executor_core::{BoxError, ExecutionOutcome, SqlSession, Statement};

/// Default per-statement timeout in seconds.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 300;

const INITIAL_DELAY_MS: u64 = 200;
const MAX_DELAY_MS: u64 = 2000;
const BACKOFF_FACTOR: f64 = 1.5;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to Athena.
#[derive(Debug, thiserror::Error)]
pub enum AthenaError {
    /// The query execution failed on the Athena side.
    #[error("Query {query_id} failed: {reason}")]
    QueryFailed { query_id: String, reason: String },

    /// The query was cancelled (either by the user or by Athena).
    #[error("Query {query_id} was cancelled")]
    QueryCancelled { query_id: String },

    /// The query exceeded the configured timeout.
    #[error("Query {query_id} timed out after {seconds}s")]
    QueryTimeout { query_id: String, seconds: u64 },

    /// Athena accepted the request but returned no execution ID.
    #[error("No query execution ID returned")]
    MissingExecutionId,

    /// An AWS SDK error (stringified).
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// An Athena "session": a client bound to one database, workgroup and
/// result location.
///
/// Athena itself is stateless between queries; statements still run strictly
/// one after the other because each `execute` waits for completion.
pub struct AthenaSession {
    client: aws_sdk_athena::Client,
    database: String,
    workgroup: String,
    output_location: String,
    timeout: Duration,
}

impl AthenaSession {
    pub fn new(
        client: aws_sdk_athena::Client,
        database: impl Into<String>,
        workgroup: impl Into<String>,
        output_location: impl Into<String>,
    ) -> Self {
        Self {
            client,
            database: database.into(),
            workgroup: workgroup.into(),
            output_location: output_location.into(),
            timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
        }
    }

    /// Override the per-statement timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one SQL string to completion.
    pub async fn run(&self, sql: &str) -> Result<ExecutionOutcome, AthenaError> {
        let query_id = self.start(sql).await?;
        info!(query_id = %query_id, "Query execution started");

        let qe = self.poll_until_complete(&query_id).await?;

        let statement_type = qe.statement_type().cloned();
        let substatement_type = qe.substatement_type();
        if matches!(statement_type, Some(StatementType::Ddl))
            || is_select(statement_type.as_ref(), substatement_type)
        {
            return Ok(outcome_for(statement_type.as_ref(), substatement_type, None));
        }

        let results = self
            .client
            .get_query_results()
            .query_execution_id(&query_id)
            .max_results(1)
            .send()
            .await
            .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

        Ok(outcome_for(
            statement_type.as_ref(),
            substatement_type,
            results.update_count(),
        ))
    }

    /// Cancel a running Athena query.
    pub async fn cancel_query(&self, query_id: &str) -> Result<(), AthenaError> {
        info!(query_id = %query_id, "Cancelling query");

        self.client
            .stop_query_execution()
            .query_execution_id(query_id)
            .send()
            .await
            .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    async fn start(&self, sql: &str) -> Result<String, AthenaError> {
        let resp = self
            .client
            .start_query_execution()
            .query_string(sql)
            .query_execution_context({
                let mut ctx = aws_sdk_athena::types::QueryExecutionContext::builder();
                if !self.database.is_empty() {
                    ctx = ctx.database(&self.database);
                }
                ctx.build()
            })
            .result_configuration(
                aws_sdk_athena::types::ResultConfiguration::builder()
                    .output_location(&self.output_location)
                    .build(),
            )
            .work_group(&self.workgroup)
            .send()
            .await
            .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

        resp.query_execution_id()
            .map(str::to_string)
            .ok_or(AthenaError::MissingExecutionId)
    }

    /// Poll `GetQueryExecution` with exponential backoff until the query
    /// reaches a terminal state or the timeout is exceeded.
    async fn poll_until_complete(
        &self,
        query_id: &str,
    ) -> Result<aws_sdk_athena::types::QueryExecution, AthenaError> {
        let start = Instant::now();
        let mut delay_ms = INITIAL_DELAY_MS;

        loop {
            let resp = self
                .client
                .get_query_execution()
                .query_execution_id(query_id)
                .send()
                .await
                .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

            let qe = resp
                .query_execution()
                .ok_or_else(|| AthenaError::AwsSdk("No query execution in response".into()))?
                .clone();

            let state = qe
                .status()
                .and_then(|s| s.state())
                .cloned()
                .unwrap_or(QueryExecutionState::Queued);

            debug!(
                query_id = %query_id,
                state = ?state,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Polling query status"
            );

            match state {
                QueryExecutionState::Succeeded => return Ok(qe),

                QueryExecutionState::Failed => {
                    let reason = qe
                        .status()
                        .and_then(|s| s.state_change_reason())
                        .unwrap_or("unknown")
                        .to_string();

                    error!(query_id = %query_id, reason = %reason, "Query failed");
                    return Err(AthenaError::QueryFailed {
                        query_id: query_id.to_string(),
                        reason,
                    });
                }

                QueryExecutionState::Cancelled => {
                    warn!(query_id = %query_id, "Query was cancelled");
                    return Err(AthenaError::QueryCancelled {
                        query_id: query_id.to_string(),
                    });
                }

                // Queued | Running | unknown future variant
                _ => {}
            }

            if start.elapsed() > self.timeout {
                warn!(
                    query_id = %query_id,
                    timeout_seconds = self.timeout.as_secs(),
                    "Query timed out, cancelling"
                );
                // Best-effort cancel; the timeout is what gets reported.
                let _ = self.cancel_query(query_id).await;
                return Err(AthenaError::QueryTimeout {
                    query_id: query_id.to_string(),
                    seconds: self.timeout.as_secs(),
                });
            }

            tokio::time::sleep(Duration::from_millis(delay_ms + jitter_ms())).await;
            delay_ms = next_delay_ms(delay_ms);
        }
    }
}

#[async_trait]
impl SqlSession for AthenaSession {
    async fn execute(&self, statement: &Statement) -> Result<ExecutionOutcome, BoxError> {
        Ok(self.run(statement.as_str()).await?)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a finished execution to what the statement produced.
///
/// A SELECT always yields a result set, even though Athena reports an
/// update count of 0 for it. Otherwise an explicit update count wins; DDL
/// changes no rows; anything else is treated as having produced a result set.
fn outcome_for(
    statement_type: Option<&StatementType>,
    substatement_type: Option<&str>,
    update_count: Option<i64>,
) -> ExecutionOutcome {
    if is_select(statement_type, substatement_type) {
        return ExecutionOutcome::ResultSet;
    }
    match (update_count, statement_type) {
        (Some(n), _) => ExecutionOutcome::RowsAffected(n),
        (None, Some(StatementType::Ddl)) => ExecutionOutcome::RowsAffected(0),
        (None, _) => ExecutionOutcome::ResultSet,
    }
}

/// Athena files SELECT under DML with a `SELECT` substatement type.
fn is_select(statement_type: Option<&StatementType>, substatement_type: Option<&str>) -> bool {
    matches!(statement_type, Some(StatementType::Dml) | None)
        && substatement_type.is_some_and(|s| s.eq_ignore_ascii_case("SELECT"))
}

fn next_delay_ms(current: u64) -> u64 {
    ((current as f64 * BACKOFF_FACTOR) as u64).min(MAX_DELAY_MS)
}

/// Jitter in `[0, 100)` ms from the sub-second clock, no RNG needed.
fn jitter_ms() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    u64::from(nanos % 100)
}

// ---------------------------------------------------------------------------
// Tests — no AWS calls
// ---------------------------------------------------------------------------
