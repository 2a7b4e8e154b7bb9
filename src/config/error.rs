//! Configuration error types.

use std::fmt;

use thiserror::Error;

/// Required fields absent from a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingConfiguration {
    /// Dotted paths of every missing required field, e.g. `service.code`.
    pub missing: Vec<String>,
}

impl fmt::Display for MissingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required configuration: {}", self.missing.join(", "))
    }
}

impl std::error::Error for MissingConfiguration {}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed in its format.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The document is well-formed but lacks required fields.
    #[error(transparent)]
    Missing(#[from] MissingConfiguration),

    /// A field is present but holds a value of the wrong shape.
    #[error("invalid value for {path}: {reason}")]
    InvalidField { path: String, reason: String },
}

impl ConfigError {
    /// Missing paths when this is a validation failure.
    pub fn missing(&self) -> Option<&[String]> {
        match self {
            ConfigError::Missing(m) => Some(&m.missing),
            _ => None,
        }
    }
}
