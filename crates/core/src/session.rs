//! Seam between the orchestrator and the query engine driver.
//!
//! The core never talks to the network itself. A [`Connector`] opens a
//! [`SqlSession`] for a validated [`Configuration`], and the session runs one
//! [`Statement`] at a time.

use std::fmt;

use async_trait::async_trait;

use crate::config::Configuration;
use crate::script::Statement;

/// Error type returned by driver implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a successfully executed statement produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The statement returned a result set.
    ResultSet,
    /// The statement changed rows (or none, for DDL).
    RowsAffected(i64),
}

impl fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResultSet => f.write_str("with results"),
            Self::RowsAffected(n) => write!(f, "{n} rows affected"),
        }
    }
}

/// Opens sessions against the remote engine.
#[async_trait]
pub trait Connector: Send + Sync {
    type Session: SqlSession;

    async fn connect(&self, config: &Configuration) -> Result<Self::Session, BoxError>;
}

/// An open session. Statements are executed one at a time, in call order.
#[async_trait]
pub trait SqlSession: Send + Sync {
    async fn execute(&self, statement: &Statement) -> Result<ExecutionOutcome, BoxError>;
}
