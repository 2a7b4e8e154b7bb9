use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Response,
};

use crate::http::request::{request_id, submission_code};
use crate::http::response;
use crate::http::server::AppState;
use crate::submission::{Submission, SubmissionCode};

pub async fn get_info() -> Response {
    response::build_info()
}

/// `POST /submit`. Authorization has already passed when this runs.
pub async fn submit(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let config = state.config.snapshot();
    let code = submission_code(&headers, &config.service.code);
    let submission = Submission::new(body, code);

    tracing::info!(
        request_id = %request_id(&headers),
        submission_id = %submission.id,
        code = submission.code.as_str(),
        length = submission.length(),
        "Submission received"
    );

    match &submission.code {
        SubmissionCode::Ok => response::created(submission.receipt()),
        SubmissionCode::Error => response::simulated_error(submission.length()),
        SubmissionCode::Unrecognized(_) => response::bad_request(),
    }
}
