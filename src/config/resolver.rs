//! Configuration resolution.
//!
//! # Responsibilities
//! - Walk a raw, format-neutral document against the known schema
//! - Collect every missing required field into one error
//! - Fall back to the built-in defaults for optional fields
//!
//! # Design Decisions
//! - A non-mapping intermediate value means "not found", never an error
//! - `null` leaves count as absent
//! - Present leaves of the wrong type are rejected, not coerced, except in
//!   `logging`: an unusable logging value falls back to its default with a
//!   warning so it cannot discard the rest of the document

use std::collections::HashSet;

use serde_json::Value;

use crate::config::error::{ConfigError, MissingConfiguration};
use crate::config::schema::{
    Configuration, LogFormat, LogLevel, LoggingConfig, SecurityConfig, ServiceConfig,
};

/// Fields every configuration document must provide.
pub const REQUIRED: &[&[&str]] = &[&["service", "code"]];

/// Resolve a raw document into a validated configuration snapshot.
pub fn resolve(raw: &Value) -> Result<Configuration, ConfigError> {
    let doc = RawDocument(raw);

    let missing: Vec<String> = REQUIRED
        .iter()
        .filter(|path| doc.lookup(path).is_none())
        .map(|path| path.join("."))
        .collect();
    if !missing.is_empty() {
        return Err(MissingConfiguration { missing }.into());
    }

    let defaults = Configuration::default();

    let service = ServiceConfig {
        code: doc
            .string(&["service", "code"])?
            .unwrap_or(defaults.service.code),
    };

    let security = SecurityConfig {
        enabled: doc
            .bool(&["security", "enabled"])?
            .unwrap_or(defaults.security.enabled),
        tokens: doc
            .string_set(&["security", "tokens"])?
            .unwrap_or(defaults.security.tokens),
    };

    let logging = LoggingConfig {
        level: doc.lenient(&["logging", "level"], decode_level, defaults.logging.level),
        format: doc.lenient(&["logging", "format"], decode_format, defaults.logging.format),
    };

    Ok(Configuration {
        service,
        security,
        logging,
    })
}

/// Borrowed view over an untyped document.
struct RawDocument<'a>(&'a Value);

impl<'a> RawDocument<'a> {
    fn lookup(&self, path: &[&str]) -> Option<&'a Value> {
        let mut node = self.0;
        for key in path {
            node = node.as_object()?.get(*key)?;
        }
        if node.is_null() {
            None
        } else {
            Some(node)
        }
    }

    fn string(&self, path: &[&str]) -> Result<Option<String>, ConfigError> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(invalid(path, "expected a string", other)),
        }
    }

    fn bool(&self, path: &[&str]) -> Result<Option<bool>, ConfigError> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(invalid(path, "expected a boolean", other)),
        }
    }

    fn string_set(&self, path: &[&str]) -> Result<Option<HashSet<String>>, ConfigError> {
        let items = match self.lookup(path) {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(invalid(path, "expected a list of strings", other)),
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(invalid(path, "expected a list of strings", other)),
            })
            .collect::<Result<HashSet<_>, _>>()
            .map(Some)
    }

    /// Decode an optional field that must never reject the document.
    fn lenient<T>(&self, path: &[&str], decode: fn(&Value) -> Result<T, String>, default: T) -> T {
        let Some(value) = self.lookup(path) else {
            return default;
        };
        decode(value).unwrap_or_else(|reason| {
            tracing::warn!(
                field = %path.join("."),
                reason = %reason,
                "Ignoring unusable logging setting, using default"
            );
            default
        })
    }
}

fn decode_level(value: &Value) -> Result<LogLevel, String> {
    match value {
        Value::String(s) => s.parse(),
        Value::Number(n) => n
            .as_u64()
            .map(LogLevel::from_severity)
            .ok_or_else(|| format!("unsupported severity {}", n)),
        other => Err(format!("expected a level name or severity, found {}", other)),
    }
}

fn decode_format(value: &Value) -> Result<LogFormat, String> {
    match value {
        Value::String(s) => s.parse(),
        other => Err(format!("expected a format name, found {}", other)),
    }
}

fn invalid(path: &[&str], expected: &str, found: &Value) -> ConfigError {
    ConfigError::InvalidField {
        path: path.join("."),
        reason: format!("{}, found {}", expected, found),
    }
}
