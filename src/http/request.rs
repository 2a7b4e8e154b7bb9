//! Request inspection.
//!
//! # Responsibilities
//! - Extract the bearer token from `Authorization`
//! - Resolve the submission code from `X-Code` or the configured default
//!
//! # Design Decisions
//! - Header-supplied codes win unconditionally and are never allow-listed
//! - Header values that are not visible ASCII still dispatch, as unrecognized

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::submission::SubmissionCode;

/// Header carrying the requested outcome.
pub const X_CODE: &str = "x-code";

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Scheme prefix required on `Authorization`, including the separator.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Token following `Bearer ` in the `Authorization` header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// The code requested via `X-Code`, falling back to `default`.
pub fn submission_code(headers: &HeaderMap, default: &str) -> SubmissionCode {
    match headers.get(X_CODE) {
        None => SubmissionCode::parse(default),
        Some(value) => match value.to_str() {
            Ok(code) => SubmissionCode::parse(code),
            Err(_) => SubmissionCode::Unrecognized(
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            ),
        },
    }
}

/// Correlation ID assigned by the request-id layer.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
