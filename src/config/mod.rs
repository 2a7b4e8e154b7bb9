//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML/JSON)
//!     → loader.rs (read & parse into an untyped tree)
//!     → resolver.rs (walk schema, apply defaults, collect missing fields)
//!     → Configuration (validated, immutable)
//!     → store.rs (SharedConfig, read by every request)
//!
//! With --watch:
//!     watcher.rs detects change
//!     → loader.rs + resolver.rs
//!     → atomic swap in SharedConfig, or keep last-good on failure
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; changes replace the whole snapshot
//! - Only `service.code` is required; everything else has a default
//! - Parse, missing-field and wrong-type failures are distinct errors

pub mod error;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod store;
pub mod watcher;

pub use error::{ConfigError, MissingConfiguration};
pub use loader::load_config;
pub use schema::{Configuration, LogFormat, LogLevel, LoggingConfig, SecurityConfig, ServiceConfig};
pub use store::SharedConfig;
