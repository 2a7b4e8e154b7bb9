//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! submitter. Every section has a `Default` that doubles as the built-in
//! default table consulted by the resolver.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Submission code used when neither the file nor the request supplies one.
pub const DEFAULT_CODE: &str = "unknown";

/// Root configuration for the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    /// Submission outcome settings.
    pub service: ServiceConfig,

    /// Bearer-token authorization settings.
    pub security: SecurityConfig,

    /// Log verbosity and formatting.
    pub logging: LoggingConfig,
}

/// Service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Default submission code when the request carries no `X-Code`.
    pub code: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE.to_string(),
        }
    }
}

/// Security settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecurityConfig {
    /// Enforce bearer-token authorization on `/submit`.
    pub enabled: bool,

    /// Accepted tokens. No ordering.
    pub tokens: HashSet<String>,
}

impl SecurityConfig {
    /// Whether `token` is one of the accepted tokens.
    pub fn accepts(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive fragment understood by `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl LogLevel {
    /// Map a numeric severity (10 debug, 20 info, 30 warning, 40 error,
    /// 50 critical) onto the closest level at or below it.
    pub fn from_severity(severity: u64) -> Self {
        match severity {
            0..=9 => LogLevel::Trace,
            10..=19 => LogLevel::Debug,
            20..=29 => LogLevel::Info,
            30..=39 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "critical" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}
