//! URL resolver error types.

/// Kinds of resolver errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ResolverErrorKind {
    /// Input string does not contain a post path segment
    #[display("No post shortcode in URL: {}", _0)]
    InvalidUrl(String),
}

/// Resolver error with location tracking.
///
/// Raised when caller input cannot be resolved to a post shortcode. This is
/// a client input error, not a system failure.
///
/// # Examples
///
/// ```
/// use vermeer_error::{ResolverError, ResolverErrorKind};
///
/// let err = ResolverError::new(ResolverErrorKind::InvalidUrl("not a url".to_string()));
/// assert!(format!("{}", err).contains("shortcode"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Resolver Error: {} at line {} in {}", kind, line, file)]
pub struct ResolverError {
    /// The kind of error that occurred
    pub kind: ResolverErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ResolverError {
    /// Create a new resolver error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResolverErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
