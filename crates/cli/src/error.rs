use athena_executor_core::{BoxError, ConfigError};
use thiserror::Error;

/// Exit code for bad arguments, unreadable inputs or an invalid configuration.
pub const EXIT_INVALID_INPUT: u8 = 1;

/// Exit code for every other failure.
pub const EXIT_FATAL: u8 = 2;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Connection to Athena failed: {0}")]
    Connection(#[source] BoxError),

    #[error("Statement {index} failed: {source}")]
    Execution {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Config(_) => EXIT_INVALID_INPUT,
            _ => EXIT_FATAL,
        }
    }
}
