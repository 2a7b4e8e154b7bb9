//! Bearer-token authorization for `/submit`.
//!
//! Runs as route middleware so a rejected request never has its body read.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use crate::config::SecurityConfig;
use crate::http::request::{bearer_token, request_id};
use crate::http::response;
use crate::http::server::AppState;

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No usable `Authorization: Bearer <token>` header.
    MissingBearer,
    /// Token not in the accepted set.
    UnknownToken,
}

/// Decide whether a request may proceed under `security`.
pub fn authorize(security: &SecurityConfig, headers: &HeaderMap) -> Result<(), AuthFailure> {
    if !security.enabled {
        return Ok(());
    }
    let token = bearer_token(headers).ok_or(AuthFailure::MissingBearer)?;
    if security.accepts(token) {
        Ok(())
    } else {
        Err(AuthFailure::UnknownToken)
    }
}

pub async fn submission_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let config = state.config.snapshot();

    match authorize(&config.security, request.headers()) {
        Ok(()) => next.run(request).await,
        Err(reason) => {
            tracing::debug!(
                request_id = %request_id(request.headers()),
                reason = ?reason,
                "Submission refused"
            );
            response::unauthorized()
        }
    }
}
