//! Media download error types.

/// Kinds of media download errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FetchErrorKind {
    /// Transport failure or non-success status from the media host
    #[display("Media download failed: {}", _0)]
    DownloadFailed(String),
    /// Payload exceeded the configured size limit
    #[display("Media payload too large: {}", _0)]
    TooLarge(String),
}

/// Media download error with location tracking.
///
/// Terminal for the whole pipeline: the fetcher never retries, so a single
/// failed GET surfaces directly to the caller.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
