//! Azure storage connection string parsing.

use vermeer_error::ConfigError;

/// Parsed Azure storage connection descriptor.
///
/// Understands the semicolon-delimited `Key=Value` format Azure hands out:
/// `DefaultEndpointsProtocol=https;AccountName=...;AccountKey=...;
/// EndpointSuffix=core.windows.net`. A `BlobEndpoint` entry overrides the
/// derived endpoint, which is how local emulators are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    /// Storage account name
    pub account_name: String,
    /// Base64-encoded shared account key
    pub account_key: String,
    /// DNS suffix for derived endpoints
    pub endpoint_suffix: String,
    /// Endpoint scheme for derived endpoints
    pub protocol: String,
    /// Explicit blob endpoint override
    pub blob_endpoint: Option<String>,
}

/// Default endpoint suffix when the descriptor omits one.
const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

impl ConnectionString {
    /// Parse a connection string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `AccountName` or `AccountKey` is
    /// missing. Unknown entries are ignored, matching Azure SDK behavior.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut account_name = None;
        let mut account_key = None;
        let mut endpoint_suffix = None;
        let mut protocol = None;
        let mut blob_endpoint = None;

        for entry in raw.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let Some((name, value)) = entry.split_once('=') else {
                return Err(ConfigError::new(format!(
                    "connection string entry has no '=': {entry}"
                )));
            };
            match name {
                "AccountName" => account_name = Some(value.to_string()),
                // The key itself is base64 and may contain '='; split_once
                // keeps the remainder intact.
                "AccountKey" => account_key = Some(value.to_string()),
                "EndpointSuffix" => endpoint_suffix = Some(value.to_string()),
                "DefaultEndpointsProtocol" => protocol = Some(value.to_string()),
                "BlobEndpoint" => blob_endpoint = Some(value.trim_end_matches('/').to_string()),
                _ => {}
            }
        }

        let account_name = account_name.ok_or_else(|| {
            ConfigError::new("connection string is missing AccountName")
        })?;
        let account_key = account_key.ok_or_else(|| {
            ConfigError::new("connection string is missing AccountKey")
        })?;

        Ok(Self {
            account_name,
            account_key,
            endpoint_suffix: endpoint_suffix
                .unwrap_or_else(|| DEFAULT_ENDPOINT_SUFFIX.to_string()),
            protocol: protocol.unwrap_or_else(|| "https".to_string()),
            blob_endpoint,
        })
    }

    /// The blob service endpoint, without a trailing slash.
    pub fn blob_endpoint(&self) -> String {
        match &self.blob_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!(
                "{}://{}.blob.{}",
                self.protocol, self.account_name, self.endpoint_suffix
            ),
        }
    }
}
