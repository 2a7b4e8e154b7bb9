//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → GET /        → handlers::get_info
//!     → POST /submit → auth.rs (bearer check, body untouched on 401)
//!                    → handlers::submit
//!                        → request.rs (X-Code or configured default)
//!                        → response.rs (201 / 500 / 400)
//! ```

pub mod auth;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use server::{build_router, AppState, HttpServer};
