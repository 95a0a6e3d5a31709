//! Configuration for the Instagram client.

use std::time::Duration;

/// Default web API origin.
pub const DEFAULT_BASE_URL: &str = "https://www.instagram.com";

/// Default deadline for one metadata request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the Instagram client connection.
///
/// Credentials come from configuration, never from request input. When both
/// are absent the client runs anonymous from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramConfig {
    /// Web API origin (overridable for tests and mirrors)
    pub base_url: String,
    /// Optional login username
    pub username: Option<String>,
    /// Optional login password
    pub password: Option<String>,
    /// Per-request deadline for metadata fetches
    pub timeout: Duration,
}

impl InstagramConfig {
    /// Create a configuration against the given origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set login credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
