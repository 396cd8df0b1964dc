use thiserror::Error;

/// Reasons a configuration document cannot be turned into a [`Configuration`].
///
/// Every variant that concerns a particular key carries its dotted path so the
/// caller can tell the user exactly what to fix.
///
/// [`Configuration`]: crate::config::Configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration key: {key}")]
    Missing { key: String },

    #[error("Invalid type for configuration key {key}: expected {expected}, found {found}")]
    InvalidType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unsupported authentication mode: {value:?} (expected user_password or aws_profile)")]
    UnsupportedAuthMode { value: String },

    #[error("Configuration parse error: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Dotted key path the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Missing { key } | Self::InvalidType { key, .. } => Some(key),
            Self::UnsupportedAuthMode { .. } => Some("auth.mode"),
            Self::Parse(_) => None,
        }
    }
}
