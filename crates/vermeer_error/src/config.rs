//! Configuration error types.

/// Configuration error with source location.
///
/// Raised at startup when the environment is incomplete or unparseable.
/// Configuration problems are never surfaced per-request; the process
/// refuses to start instead.
///
/// # Examples
///
/// ```
/// use vermeer_error::ConfigError;
///
/// let err = ConfigError::new("AZURE_STORAGE_CONNECTION_STRING is not set");
/// assert!(err.message.contains("not set"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
