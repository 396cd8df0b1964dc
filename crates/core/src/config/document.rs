//! Typed access to a generic configuration tree.
//!
//! [`ConfigDocument`] hides the concrete parser behind dotted-path lookups so
//! the configuration model never touches parser types directly.

use crate::error::ConfigError;

/// A scalar (or the kind of a non-scalar) found at a dotted path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue<'a> {
    String(&'a str),
    Bool(bool),
    /// Any other kind of value, described by its type name.
    Other(&'static str),
}

impl ConfigValue<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Other(name) => *name,
        }
    }
}

/// Read-only view over a hierarchical key/value document.
///
/// Implementors only resolve paths; the typed getters are provided and all
/// fail closed when the stored value has the wrong type.
pub trait ConfigDocument {
    /// Resolve a dotted path such as `auth.mode`.
    ///
    /// Returns `Ok(None)` when any segment is absent. An intermediate segment
    /// that exists but is not a table is a type error.
    fn lookup(&self, path: &str) -> Result<Option<ConfigValue<'_>>, ConfigError>;

    fn required_string(&self, path: &str) -> Result<String, ConfigError> {
        match self.lookup(path)? {
            Some(ConfigValue::String(s)) => Ok(s.to_string()),
            Some(other) => Err(type_mismatch(path, "string", &other)),
            None => Err(ConfigError::Missing {
                key: path.to_string(),
            }),
        }
    }

    fn optional_string(&self, path: &str, default: &str) -> Result<String, ConfigError> {
        match self.lookup(path)? {
            Some(ConfigValue::String(s)) => Ok(s.to_string()),
            Some(other) => Err(type_mismatch(path, "string", &other)),
            None => Ok(default.to_string()),
        }
    }

    fn optional_bool(&self, path: &str, default: bool) -> Result<bool, ConfigError> {
        match self.lookup(path)? {
            Some(ConfigValue::Bool(b)) => Ok(b),
            Some(other) => Err(type_mismatch(path, "boolean", &other)),
            None => Ok(default),
        }
    }
}

fn type_mismatch(path: &str, expected: &'static str, found: &ConfigValue<'_>) -> ConfigError {
    ConfigError::InvalidType {
        key: path.to_string(),
        expected,
        found: found.type_name(),
    }
}

// ── TOML backend ─────────────────────────────────────────────────

impl ConfigDocument for toml::Table {
    fn lookup(&self, path: &str) -> Result<Option<ConfigValue<'_>>, ConfigError> {
        let mut table = self;
        let mut walked = String::new();
        let mut segments = path.split('.').peekable();

        while let Some(segment) = segments.next() {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);

            let Some(value) = table.get(segment) else {
                return Ok(None);
            };

            if segments.peek().is_none() {
                return Ok(Some(match value {
                    toml::Value::String(s) => ConfigValue::String(s),
                    toml::Value::Boolean(b) => ConfigValue::Bool(*b),
                    other => ConfigValue::Other(other.type_str()),
                }));
            }

            match value {
                toml::Value::Table(inner) => table = inner,
                other => {
                    return Err(ConfigError::InvalidType {
                        key: walked,
                        expected: "table",
                        found: other.type_str(),
                    })
                }
            }
        }

        Ok(None)
    }
}
