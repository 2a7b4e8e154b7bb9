//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Default logging → Load config (fail-open) → Re-apply logging → Serve
//!
//! Reload (startup.rs, with --watch):
//!     File event → Load config → Swap snapshot or keep last-good
//!
//! Shutdown (signals.rs → shutdown.rs):
//!     SIGTERM/SIGINT → Broadcast → Server drains and exits
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
