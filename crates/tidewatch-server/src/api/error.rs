use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tidewatch_core::ai::{DEFAULT_TIP, DIGEST_UNAVAILABLE};
use tidewatch_core::Error;

/// Failure of one API endpoint, rendered with that endpoint's error body
#[derive(Debug)]
pub enum ApiError {
    Feeds(String),
    /// Request body that is not JSON or does not match the request shape
    InvalidBody(String),
    Digest(Error),
    Answer(Error),
    Quiz(String),
}

/// Configuration problems are the caller's to fix and are reported verbatim;
/// anything else only gets a generic message, the detail stays in the log.
fn classify(err: &Error, remote_status: StatusCode, generic: &str) -> (StatusCode, String) {
    match err {
        Error::Config(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        e if e.is_remote() => {
            if let Error::RemoteService { status, body } = e {
                tracing::error!("Completion service returned {}: {}", status, body);
            } else {
                tracing::error!("Completion service error: {}", e);
            }
            (remote_status, generic.to_string())
        }
        e => {
            tracing::error!("Internal error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, generic.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Feeds(detail) => {
                tracing::error!("Feed aggregation failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch feeds", "articles": [] })),
                )
                    .into_response()
            }
            ApiError::InvalidBody(detail) => {
                tracing::warn!("Rejected summarize request: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": format!("Invalid request body: {}", detail),
                        "digest": DIGEST_UNAVAILABLE,
                        "tipOfTheDay": DEFAULT_TIP,
                    })),
                )
                    .into_response()
            }
            ApiError::Digest(e) => {
                let (status, message) = classify(
                    &e,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate summary",
                );
                (
                    status,
                    Json(json!({
                        "error": message,
                        "digest": DIGEST_UNAVAILABLE,
                        "tipOfTheDay": DEFAULT_TIP,
                    })),
                )
                    .into_response()
            }
            ApiError::Answer(e) => {
                let (status, message) =
                    classify(&e, StatusCode::BAD_GATEWAY, "Failed to get an answer");
                (status, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Quiz(detail) => {
                tracing::error!("Quiz generation failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to generate quiz", "questions": [] })),
                )
                    .into_response()
            }
        }
    }
}
