//! Uniform failure taxonomy for the fetch pipeline.

use crate::{FetchError, FetchErrorKind, ResolverError, StorageError, StorageErrorKind};

/// The caller-visible failure taxonomy.
///
/// Every stage error collapses into exactly one of these kinds. The HTTP
/// layer matches on the kind to choose a status code: [`Self::InvalidUrl`]
/// is the caller's fault (400), everything else is a server-side failure
/// (500).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FailureKind {
    /// Input URL contained no post shortcode
    #[display("invalid_url")]
    InvalidUrl,
    /// Upstream provider reports no such post
    #[display("post_not_found")]
    PostNotFound,
    /// Post exists but access is restricted and no valid session is held
    #[display("private_post")]
    PrivatePost,
    /// Upstream provider unreachable or failing transiently
    #[display("upstream_unavailable")]
    UpstreamUnavailable,
    /// Binary media download failed
    #[display("media_download_failed")]
    MediaDownloadFailed,
    /// Object storage unreachable or rejected the request
    #[display("storage_unavailable")]
    StorageUnavailable,
    /// Object storage reported a capacity limit
    #[display("storage_quota_exceeded")]
    StorageQuotaExceeded,
}

impl FailureKind {
    /// Whether this failure is attributable to caller input.
    ///
    /// Exactly one kind is: everything past the resolver is a server-side
    /// failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FailureKind::InvalidUrl)
    }
}

/// A pipeline stage failure, uniform across all stages.
///
/// Carries the taxonomy kind plus a human-readable message naming the
/// failing stage. The message is part of the caller-visible contract;
/// the `file`/`line` location is for operator logs only.
///
/// # Examples
///
/// ```
/// use vermeer_error::{FailureKind, PipelineError};
///
/// let err = PipelineError::new(FailureKind::PostNotFound, "post XYZ does not exist");
/// assert_eq!(*err.kind(), FailureKind::PostNotFound);
/// assert!(!err.kind().is_client_error());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error ({}): {} at line {} in {}", kind, message, line, file)]
pub struct PipelineError {
    kind: FailureKind,
    message: String,
    line: u32,
    file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The taxonomy kind of this failure.
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// The caller-visible message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ResolverError> for PipelineError {
    #[track_caller]
    fn from(err: ResolverError) -> Self {
        PipelineError::new(FailureKind::InvalidUrl, err.kind.to_string())
    }
}

impl From<FetchError> for PipelineError {
    #[track_caller]
    fn from(err: FetchError) -> Self {
        let message = match &err.kind {
            FetchErrorKind::DownloadFailed(msg) => format!("media download failed: {msg}"),
            FetchErrorKind::TooLarge(msg) => format!("media download failed: {msg}"),
        };
        PipelineError::new(FailureKind::MediaDownloadFailed, message)
    }
}

impl From<StorageError> for PipelineError {
    #[track_caller]
    fn from(err: StorageError) -> Self {
        match &err.kind {
            StorageErrorKind::Unavailable(msg) => PipelineError::new(
                FailureKind::StorageUnavailable,
                format!("storage upload failed: {msg}"),
            ),
            StorageErrorKind::QuotaExceeded(msg) => PipelineError::new(
                FailureKind::StorageQuotaExceeded,
                format!("storage quota exceeded: {msg}"),
            ),
        }
    }
}
