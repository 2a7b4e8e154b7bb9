//! Structured logging.
//!
//! # Responsibilities
//! - Install the process-wide subscriber writing to stdout
//! - Start with bootstrap defaults so early startup is visible
//! - Re-apply level and format once the configuration file is resolved
//!
//! # Design Decisions
//! - One subscriber, installed once; filter and formatter sit behind
//!   `reload` handles so later calls swap them in place
//! - The shared logger name is the crate target, `dummy_submitter`

use thiserror::Error;
use tracing_subscriber::{
    fmt,
    layer::{Layered, SubscriberExt},
    reload,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

use crate::config::{LogFormat, LogLevel, LoggingConfig};

/// Target shared by every log event of the service.
pub const LOGGER_NAME: &str = "dummy_submitter";

type FilterLayer = reload::Layer<EnvFilter, Registry>;
type Filtered = Layered<FilterLayer, Registry>;
type FormatLayer = Box<dyn Layer<Filtered> + Send + Sync>;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
    #[error("failed to reconfigure logging: {0}")]
    Reload(#[from] reload::Error),
}

/// Handle for re-configuring the installed subscriber.
#[derive(Clone)]
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    format: reload::Handle<FormatLayer, Filtered>,
}

impl LogHandle {
    /// Apply the operator's logging settings to all subsequent output.
    pub fn apply(&self, config: &LoggingConfig) -> Result<(), LoggingError> {
        self.filter.reload(filter_for(config.level))?;
        self.format.reload(format_layer(config.format))?;
        Ok(())
    }
}

/// Install the subscriber with bootstrap defaults.
///
/// `RUST_LOG` overrides the default level until [`LogHandle::apply`] runs.
pub fn init_default_logging() -> Result<LogHandle, LoggingError> {
    let defaults = LoggingConfig::default();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(defaults.level));

    let (filter_layer, filter) = reload::Layer::<EnvFilter, Registry>::new(filter);
    let (format_layer, format) =
        reload::Layer::<FormatLayer, Filtered>::new(format_layer(defaults.format));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .try_init()?;

    Ok(LogHandle { filter, format })
}

/// Filter directive for the service logger and the HTTP trace layer.
pub fn directive(level: LogLevel) -> String {
    format!("{LOGGER_NAME}={level},tower_http={level}")
}

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::new(directive(level))
}

fn format_layer(format: LogFormat) -> FormatLayer {
    let layer = fmt::layer::<Filtered>().with_writer(std::io::stdout);
    match format {
        LogFormat::Full => Box::new(layer),
        LogFormat::Compact => Box::new(layer.compact()),
        LogFormat::Pretty => Box::new(layer.pretty()),
        LogFormat::Json => Box::new(layer.json()),
    }
}
