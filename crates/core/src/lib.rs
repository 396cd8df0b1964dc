pub mod config;
pub mod error;
pub mod script;
pub mod session;

pub use config::{
    Auth, AuthMode, ConfigDocument, ConfigValue, Configuration, LoggingConfig, SslConfig,
};
pub use error::ConfigError;
pub use script::{parse_script, split, strip, Statement, TERMINATOR};
pub use session::{BoxError, Connector, ExecutionOutcome, SqlSession};
