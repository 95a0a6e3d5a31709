//! Service configuration from the environment.

use vermeer_error::ConfigError;
use vermeer_storage::ConnectionString;

/// Default storage container for relayed media.
const DEFAULT_CONTAINER: &str = "instagram";

/// Default listen port.
const DEFAULT_PORT: u16 = 8000;

/// Service configuration.
///
/// Loaded once at startup. The storage connection descriptor is mandatory
/// and parsed eagerly so a malformed or missing descriptor kills the
/// process before it accepts traffic, never a request.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Parsed Azure storage connection descriptor
    pub storage_connection: ConnectionString,
    /// Storage container relayed media lands in
    pub container: String,
    /// Instagram web API origin
    pub instagram_base_url: String,
    /// Optional Instagram login username
    pub instagram_username: Option<String>,
    /// Optional Instagram login password
    pub instagram_password: Option<String>,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads:
    /// - `AZURE_STORAGE_CONNECTION_STRING` (required)
    /// - `AZURE_STORAGE_CONTAINER` (default: "instagram")
    /// - `INSTAGRAM_BASE_URL` (default: the public web origin)
    /// - `INSTAGRAM_USERNAME` / `INSTAGRAM_PASSWORD` (optional)
    /// - `PORT` (default: 8000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_connection = std::env::var("AZURE_STORAGE_CONNECTION_STRING")
            .map_err(|_| ConfigError::new("AZURE_STORAGE_CONNECTION_STRING is not set"))?;
        let storage_connection = ConnectionString::parse(&raw_connection)?;

        let container = std::env::var("AZURE_STORAGE_CONTAINER")
            .unwrap_or_else(|_| DEFAULT_CONTAINER.to_string());

        let instagram_base_url = std::env::var("INSTAGRAM_BASE_URL")
            .unwrap_or_else(|_| vermeer_social::DEFAULT_BASE_URL.to_string());
        let instagram_username = std::env::var("INSTAGRAM_USERNAME").ok();
        let instagram_password = std::env::var("INSTAGRAM_PASSWORD").ok();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::new(format!("PORT is not a number: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            storage_connection,
            container,
            instagram_base_url,
            instagram_username,
            instagram_password,
            port,
        })
    }
}
