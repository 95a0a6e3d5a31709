//! Response body types and status mapping.

use crate::FetchedPost;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use vermeer_error::{FailureKind, PipelineError};

/// Caller-visible message for invalid input URLs.
///
/// Fixed by contract; resolver detail stays in logs.
const INVALID_URL_MESSAGE: &str = "URL is invalid";

/// Success body of `POST /api/fetch-post`.
///
/// One fixed shape; the service never returns partial success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchPostResponse {
    /// Public URL of the re-hosted media
    pub media_url: String,
    /// Post caption
    pub caption: String,
    /// Like count
    pub likes: i64,
    /// Comment count
    pub comments: i64,
    /// Whether the media is a video
    pub is_video: bool,
}

impl From<FetchedPost> for FetchPostResponse {
    fn from(fetched: FetchedPost) -> Self {
        Self {
            media_url: fetched.media_url,
            caption: fetched.metadata.caption,
            likes: fetched.metadata.like_count,
            comments: fetched.metadata.comment_count,
            is_video: fetched.metadata.is_video,
        }
    }
}

/// Failure body, uniform across every failure kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message describing the failing stage
    pub error: String,
}

impl From<&PipelineError> for ErrorResponse {
    fn from(err: &PipelineError) -> Self {
        let error = if err.kind().is_client_error() {
            INVALID_URL_MESSAGE.to_string()
        } else {
            err.message().to_string()
        };
        Self { error }
    }
}

/// HTTP status for a failure kind: the caller's fault is a 400, everything
/// else a 500.
pub fn status_for(kind: &FailureKind) -> StatusCode {
    if kind.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
