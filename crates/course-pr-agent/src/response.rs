//! Error payloads returned by the PR agent tools.
//!
//! Tool failures are reported in-band as JSON so the model can read them:
//! `{"error": {"code": 404, "message": "...", "details": "..."}}`.

use serde::{Deserialize, Serialize};

/// Body of an error payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP-like status code.
    pub code: u16,
    /// What the tool was doing when it failed.
    pub message: String,
    /// Underlying error, if any.
    pub details: Option<String>,
}

/// Error payload envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error.
    pub error: ErrorBody,
}

impl ErrorResponse {
    /// Payload without an underlying error.
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
                details: None,
            },
        }
    }

    /// Payload describing `err`, using its status code.
    pub fn from_error(message: impl Into<String>, err: &course_core::Error) -> Self {
        Self {
            error: ErrorBody {
                code: err.status_code(),
                message: message.into(),
                details: Some(error_chain(err)),
            },
        }
    }
}

/// Render an error and its sources, outermost first.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
