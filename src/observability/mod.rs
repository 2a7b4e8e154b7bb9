//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup  → logging::init_default_logging (bootstrap level/format)
//! config   → LogHandle::apply (operator level/format)
//! requests → tower-http TraceLayer + handler events → stdout
//! ```

pub mod logging;

pub use logging::{init_default_logging, LogHandle, LoggingError, LOGGER_NAME};
