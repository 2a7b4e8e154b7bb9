//! Mock document submission service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod submission;

pub use config::{Configuration, SharedConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
