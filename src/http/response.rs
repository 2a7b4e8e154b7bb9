//! Fixed response shapes.
//!
//! Every body the service can produce is built here so the wording stays in
//! one place.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::submission::SubmissionReceipt;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized submission request.\n\n\
     The submission service is not configured properly.\n";

pub const BAD_REQUEST_MESSAGE: &str = "You sent some BAD REQUEST.\n\n\
     You are very bad and the service could not figure out\
     what to do with your weird request.\n";

/// Static build metadata served on `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    };
}

pub fn build_info() -> Response {
    (StatusCode::OK, Json(BuildInfo::CURRENT)).into_response()
}

/// 401 for a missing, malformed or rejected bearer token.
pub fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE).into_response()
}

/// 201 with `Location` mirroring the receipt's `location`.
pub fn created(receipt: SubmissionReceipt) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, receipt.location.clone())],
        Json(receipt),
    )
        .into_response()
}

/// 500 reporting the size of the document that was "lost".
pub fn simulated_error(length: usize) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, simulated_error_message(length)).into_response()
}

pub fn simulated_error_message(length: usize) -> String {
    format!(
        "Sorry... wild error appeared.\n\n\
         The error prevented the document to be submitted.\n\
         But the document was nice and got {} bytes.\n",
        length
    )
}

/// 400 for any code without a defined outcome. Never discloses the length.
pub fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE).into_response()
}
