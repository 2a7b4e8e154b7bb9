//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::error::ConfigError;
use crate::config::resolver::resolve;
use crate::config::schema::Configuration;

/// Document syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the syntax from the file extension. YAML unless stated otherwise.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "toml" => DocumentFormat::Toml,
            "json" => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parse a document into a format-neutral tree. Performs no validation.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value, ConfigError> {
    match format {
        DocumentFormat::Yaml if content.trim().is_empty() => Ok(Value::Null),
        DocumentFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }
}

/// Parse and resolve a configuration document held in memory.
pub fn load_str(content: &str, format: DocumentFormat) -> Result<Configuration, ConfigError> {
    let raw = parse_document(content, format)?;
    resolve(&raw)
}

/// Load and validate configuration from a file.
pub fn load_config(path: &Path) -> Result<Configuration, ConfigError> {
    let content = fs::read_to_string(path)?;
    load_str(&content, DocumentFormat::from_path(path))
}
