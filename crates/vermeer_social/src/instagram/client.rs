//! Instagram client with optional session login.

use super::models::{LoginResponse, PostInfoResponse};
use super::{InstagramConfig, InstagramError, InstagramErrorKind, InstagramResult};
use crate::PostSource;
use reqwest::cookie::{CookieStore, Jar};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use vermeer_core::PostMetadata;

/// Browser user agent presented to the web API.
///
/// The API refuses clients that do not identify as a browser.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Whether the client holds an authenticated session.
///
/// Exposed so operators can distinguish "public fetch succeeded" from
/// "authenticated fetch succeeded". Degraded mode is a state, not a log
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionMode {
    /// No session; only public posts are fetchable
    #[display("anonymous")]
    Anonymous,
    /// Logged in with configured credentials
    #[display("authenticated")]
    Authenticated,
}

/// Client for the Instagram web API.
///
/// Holds a cookie-carrying HTTP client so the session established by
/// [`InstagramClient::login`] flows into subsequent post lookups. Login is
/// optional and non-fatal: on any login failure the client logs a warning
/// and continues anonymous, since public posts remain fetchable without a
/// session.
///
/// # Example
/// ```no_run
/// use vermeer_social::{InstagramClient, InstagramConfig, PostSource};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = InstagramConfig::default().with_credentials("user", "pass");
/// let mut client = InstagramClient::new(config)?;
/// client.login().await;
/// let metadata = client.fetch_post("CxYz123").await?;
/// println!("{} likes", metadata.like_count);
/// # Ok(())
/// # }
/// ```
pub struct InstagramClient {
    client: reqwest::Client,
    jar: Arc<Jar>,
    config: InstagramConfig,
    mode: SessionMode,
}

impl std::fmt::Debug for InstagramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials stay out of debug output.
        f.debug_struct("InstagramClient")
            .field("base_url", &self.config.base_url)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl InstagramClient {
    /// Create a client from configuration. No network traffic happens here.
    pub fn new(config: InstagramConfig) -> InstagramResult<Self> {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(jar.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                InstagramError::new(InstagramErrorKind::Unavailable(format!(
                    "failed to build HTTP client: {e}"
                )))
            })?;

        Ok(Self {
            client,
            jar,
            config,
            mode: SessionMode::Anonymous,
        })
    }

    /// Current session mode.
    pub fn session_mode(&self) -> SessionMode {
        self.mode
    }

    /// Attempt to establish a session with the configured credentials.
    ///
    /// Without credentials this is a no-op. A failed login of any kind
    /// (transport error, rejected credentials, unexpected body) degrades to
    /// anonymous access with a structured warning; it never propagates.
    /// Returns the resulting mode.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn login(&mut self) -> SessionMode {
        let (Some(username), Some(password)) = (
            self.config.username.clone(),
            self.config.password.clone(),
        ) else {
            debug!("No Instagram credentials configured, staying anonymous");
            return self.mode;
        };

        match self.try_login(&username, &password).await {
            Ok(true) => {
                self.mode = SessionMode::Authenticated;
                info!(auth_mode = %self.mode, "Instagram login succeeded");
            }
            Ok(false) => {
                warn!(
                    auth_mode = %self.mode,
                    "Instagram rejected the configured credentials, continuing anonymous"
                );
            }
            Err(e) => {
                warn!(
                    auth_mode = %self.mode,
                    error = %e,
                    "Instagram login failed, continuing anonymous"
                );
            }
        }

        self.mode
    }

    /// Run the web login handshake: seed a CSRF cookie, then post the form.
    async fn try_login(&self, username: &str, password: &str) -> InstagramResult<bool> {
        let login_page = format!("{}/accounts/login/", self.config.base_url);
        self.client
            .get(&login_page)
            .send()
            .await
            .map_err(|e| transport_error(&login_page, &e))?;

        let login_url = format!("{}/accounts/login/ajax/", self.config.base_url);
        let mut request = self
            .client
            .post(&login_url)
            .form(&[("username", username), ("password", password)]);
        if let Some(token) = self.csrf_token() {
            request = request.header("X-CSRFToken", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(&login_url, &e))?;
        if !response.status().is_success() {
            return Ok(false);
        }

        let body: LoginResponse = response.json().await.map_err(|e| {
            InstagramError::new(InstagramErrorKind::MalformedResponse(format!(
                "login response did not decode: {e}"
            )))
        })?;

        Ok(body.authenticated)
    }

    /// Read the csrftoken cookie the login page set, if any.
    fn csrf_token(&self) -> Option<String> {
        let url = reqwest::Url::parse(&self.config.base_url).ok()?;
        let header = self.jar.cookies(&url)?;
        let cookies = header.to_str().ok()?;
        cookies
            .split("; ")
            .find_map(|pair| pair.strip_prefix("csrftoken="))
            .map(str::to_string)
    }

    /// Look up one post by shortcode.
    #[instrument(skip(self), fields(auth_mode = %self.mode))]
    async fn fetch_post_inner(&self, shortcode: &str) -> InstagramResult<PostMetadata> {
        let url = format!(
            "{}/p/{}/?__a=1&__d=dis",
            self.config.base_url, shortcode
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, &e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(InstagramError::new(InstagramErrorKind::PostNotFound(
                shortcode.to_string(),
            )));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(InstagramError::new(InstagramErrorKind::PrivatePost(
                format!("{shortcode} (HTTP {status}, session {})", self.mode),
            )));
        }
        if !status.is_success() {
            return Err(InstagramError::new(InstagramErrorKind::Unavailable(
                format!("post info request returned HTTP {status}"),
            )));
        }

        let body: PostInfoResponse = response.json().await.map_err(|e| {
            InstagramError::new(InstagramErrorKind::MalformedResponse(format!(
                "post info for {shortcode} did not decode: {e}"
            )))
        })?;

        if body.require_login.unwrap_or(false) {
            return Err(InstagramError::new(InstagramErrorKind::PrivatePost(
                format!("{shortcode} (login wall, session {})", self.mode),
            )));
        }

        let media = body.graphql.and_then(|graphql| graphql.shortcode_media);
        let Some(media) = media else {
            // Anonymous lookups of restricted posts come back as an empty
            // envelope rather than an explicit marker.
            return match self.mode {
                SessionMode::Anonymous => Err(InstagramError::new(
                    InstagramErrorKind::PrivatePost(format!(
                        "{shortcode} (empty envelope, session {})",
                        self.mode
                    )),
                )),
                SessionMode::Authenticated => Err(InstagramError::new(
                    InstagramErrorKind::MalformedResponse(format!(
                        "post info for {shortcode} has no shortcode_media"
                    )),
                )),
            };
        };

        debug!(shortcode, is_video = media.is_video, "Fetched post metadata");
        media.into_metadata(shortcode)
    }
}

#[async_trait::async_trait]
impl PostSource for InstagramClient {
    async fn fetch_post(&self, shortcode: &str) -> InstagramResult<PostMetadata> {
        self.fetch_post_inner(shortcode).await
    }
}

/// Map a reqwest transport failure onto the provider taxonomy.
#[track_caller]
fn transport_error(url: &str, err: &reqwest::Error) -> InstagramError {
    let detail = if err.is_timeout() {
        format!("request to {url} timed out")
    } else {
        format!("request to {url} failed: {err}")
    };
    InstagramError::new(InstagramErrorKind::Unavailable(detail))
}
