//! Instagram-specific error types.

use vermeer_error::{FailureKind, PipelineError};

/// Instagram error variants.
///
/// Represents the failure conditions of a post-info lookup. Login failures
/// are absent on purpose: they are recovered locally by degrading to
/// anonymous access and never propagate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum InstagramErrorKind {
    /// Provider reports no post under this shortcode.
    #[display("Post not found: {_0}")]
    PostNotFound(String),

    /// Post access is restricted and no valid session exists.
    #[display("Post is private: {_0}")]
    PrivatePost(String),

    /// Provider unreachable, timing out, rate limiting, or failing.
    #[display("Instagram unavailable: {_0}")]
    Unavailable(String),

    /// Provider answered 200 with a body that does not decode to a post.
    #[display("Malformed Instagram response: {_0}")]
    MalformedResponse(String),
}

/// Instagram error with source location tracking.
///
/// # Example
/// ```
/// use vermeer_social::{InstagramError, InstagramErrorKind};
///
/// let err = InstagramError::new(InstagramErrorKind::PostNotFound("ABC123".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("Instagram Error: {} at line {} in {}", kind, line, file)]
pub struct InstagramError {
    kind: InstagramErrorKind,
    line: u32,
    file: &'static str,
}

impl InstagramError {
    /// Create a new InstagramError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InstagramErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Instagram operations.
pub type InstagramResult<T> = Result<T, InstagramError>;

impl From<InstagramError> for PipelineError {
    #[track_caller]
    fn from(err: InstagramError) -> Self {
        let kind = match err.kind() {
            InstagramErrorKind::PostNotFound(_) => FailureKind::PostNotFound,
            InstagramErrorKind::PrivatePost(_) => FailureKind::PrivatePost,
            InstagramErrorKind::Unavailable(_) => FailureKind::UpstreamUnavailable,
            InstagramErrorKind::MalformedResponse(_) => FailureKind::UpstreamUnavailable,
        };
        PipelineError::new(kind, err.kind().to_string())
    }
}
