//! Submission model.
//!
//! A [`Submission`] lives for the duration of one `POST /submit` and is
//! never stored.

use axum::body::Bytes;
use serde::Serialize;
use uuid::Uuid;

/// Base of the synthetic resource URL returned for accepted submissions.
pub const LOCATION_BASE: &str = "https://example.com/submission";

/// Simulated outcome requested by the caller or the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionCode {
    /// `"ok"`: accept and return 201.
    Ok,
    /// `"error"`: simulate an internal failure, 500.
    Error,
    /// Anything else: simulate bad input, 400.
    Unrecognized(String),
}

impl SubmissionCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "ok" => SubmissionCode::Ok,
            "error" => SubmissionCode::Error,
            other => SubmissionCode::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubmissionCode::Ok => "ok",
            SubmissionCode::Error => "error",
            SubmissionCode::Unrecognized(code) => code,
        }
    }
}

/// One incoming document.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: Uuid,
    pub body: Bytes,
    pub code: SubmissionCode,
}

impl Submission {
    /// Create a submission with a fresh random identifier.
    pub fn new(body: Bytes, code: SubmissionCode) -> Self {
        Self {
            id: Uuid::new_v4(),
            body,
            code,
        }
    }

    /// Byte count of the consumed body.
    pub fn length(&self) -> usize {
        self.body.len()
    }

    pub fn location(&self) -> String {
        format!("{}/{}", LOCATION_BASE, self.id)
    }

    pub fn receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            uuid: self.id,
            location: self.location(),
            length: self.length(),
        }
    }
}

/// JSON body of a 201 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub uuid: Uuid,
    pub location: String,
    pub length: usize,
}
