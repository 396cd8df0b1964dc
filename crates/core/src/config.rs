//! Validated run configuration.
//!
//! [`Configuration::build`] reads a [`ConfigDocument`] and either returns a
//! fully consistent value or the first problem it found. Nothing here touches
//! the environment, the filesystem or the network.

pub mod document;

use std::fmt;
use std::str::FromStr;

pub use document::{ConfigDocument, ConfigValue};

use crate::error::ConfigError;

/// Default `logging.level`.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default `logging.log_file`.
pub const DEFAULT_LOG_FILE: &str = "logs/athena-executor.log";

// ── Auth ─────────────────────────────────────────────────────────

/// How the connection to the query engine authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    UserPassword,
    AwsProfile,
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("user_password") {
            Ok(Self::UserPassword)
        } else if s.eq_ignore_ascii_case("aws_profile") {
            Ok(Self::AwsProfile)
        } else {
            Err(ConfigError::UnsupportedAuthMode {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserPassword => f.write_str("user_password"),
            Self::AwsProfile => f.write_str("aws_profile"),
        }
    }
}

/// Credentials for one auth mode. Only the fields of the chosen mode exist.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    UserPassword { user: String, password: String },
    AwsProfile { profile: String },
}

impl Auth {
    fn from_document(doc: &impl ConfigDocument) -> Result<Self, ConfigError> {
        let mode: AuthMode = doc.required_string("auth.mode")?.parse()?;
        match mode {
            AuthMode::UserPassword => Ok(Self::UserPassword {
                user: doc.required_string("auth.user")?,
                password: doc.required_string("auth.password")?,
            }),
            AuthMode::AwsProfile => Ok(Self::AwsProfile {
                profile: doc.required_string("auth.profile")?,
            }),
        }
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            Self::UserPassword { .. } => AuthMode::UserPassword,
            Self::AwsProfile { .. } => AuthMode::AwsProfile,
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserPassword { user, .. } => f
                .debug_struct("UserPassword")
                .field("user", user)
                .field("password", &"<redacted>")
                .finish(),
            Self::AwsProfile { profile } => f
                .debug_struct("AwsProfile")
                .field("profile", profile)
                .finish(),
        }
    }
}

// ── SSL / Logging ────────────────────────────────────────────────

/// TLS policy for the connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SslConfig {
    /// Skip server certificate verification. Defaults to `false`.
    pub disable_cert_checking: bool,
}

impl SslConfig {
    fn from_document(doc: &impl ConfigDocument) -> Result<Self, ConfigError> {
        Ok(Self {
            disable_cert_checking: doc.optional_bool("ssl.disable_cert_checking", false)?,
        })
    }
}

/// Logging policy applied once the configuration is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level name such as `DEBUG`, `INFO`, `WARN` or `ERROR`.
    pub level: String,
    /// Whether log output is also written to `log_file`.
    pub file_logging: bool,
    pub log_file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file_logging: true,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl LoggingConfig {
    fn from_document(doc: &impl ConfigDocument) -> Result<Self, ConfigError> {
        Ok(Self {
            level: doc.optional_string("logging.level", DEFAULT_LOG_LEVEL)?,
            file_logging: doc.optional_bool("logging.file_logging", true)?,
            log_file: doc.optional_string("logging.log_file", DEFAULT_LOG_FILE)?,
        })
    }
}

// ── Configuration ────────────────────────────────────────────────

/// Connection target, credentials, TLS and logging policy for one run.
///
/// Only obtainable through [`Configuration::build`] (or
/// [`Configuration::from_toml_str`]), so every instance is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    region: String,
    output_location: String,
    workgroup: String,
    database: String,
    auth: Auth,
    ssl: SslConfig,
    logging: LoggingConfig,
}

impl Configuration {
    /// Validate `doc` and build a configuration from it.
    ///
    /// Required keys: `region`, `output_location`, `workgroup`, `database`,
    /// `auth.mode`, plus `auth.user`/`auth.password` or `auth.profile`
    /// depending on the mode. `[ssl]` and `[logging]` keys are optional.
    pub fn build(doc: &impl ConfigDocument) -> Result<Self, ConfigError> {
        Ok(Self {
            region: doc.required_string("region")?,
            output_location: doc.required_string("output_location")?,
            workgroup: doc.required_string("workgroup")?,
            database: doc.required_string("database")?,
            auth: Auth::from_document(doc)?,
            ssl: SslConfig::from_document(doc)?,
            logging: LoggingConfig::from_document(doc)?,
        })
    }

    /// Parse TOML text and build a configuration from it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::build(&table)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn output_location(&self) -> &str {
        &self.output_location
    }

    pub fn workgroup(&self) -> &str {
        &self.workgroup
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth.mode()
    }

    pub fn ssl(&self) -> &SslConfig {
        &self.ssl
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// One-line summary safe to log (no secrets).
    pub fn connection_info(&self) -> String {
        format!(
            "region={}, workgroup={}, database={}, auth={}, ssl={}",
            self.region,
            self.workgroup,
            self.database,
            self.auth.mode(),
            !self.ssl.disable_cert_checking
        )
    }
}

// ── Tests ────────────────────────────────────────────────────────
