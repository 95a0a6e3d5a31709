//! Azure Blob Storage backend.
//!
//! Speaks the Blob service REST protocol directly: one Put Blob call per
//! upload, authorized with a SharedKey signature over the canonicalized
//! request. No SDK sits in between; the request surface the service needs
//! is a single operation.

use crate::{BlobStore, ConnectionString, UploadResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;
use tracing::{debug, instrument};
use vermeer_core::{MediaPayload, StorageKey};
use vermeer_error::{StorageError, StorageErrorKind};

type HmacSha256 = Hmac<Sha256>;

/// Blob service API version sent with every request.
const API_VERSION: &str = "2021-08-06";

/// Default deadline for one upload.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Azure Blob Storage backend.
///
/// Constructed once at startup from a parsed [`ConnectionString`] and a
/// container name, then shared across requests; the inner HTTP client pools
/// connections and is safe for concurrent use.
pub struct AzureBlobStore {
    client: reqwest::Client,
    connection: ConnectionString,
    container: String,
}

impl std::fmt::Debug for AzureBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The account key stays out of debug output.
        f.debug_struct("AzureBlobStore")
            .field("account", &self.connection.account_name)
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

impl AzureBlobStore {
    /// Create a store for one container with the default upload deadline.
    pub fn new(
        connection: ConnectionString,
        container: impl Into<String>,
    ) -> Result<Self, StorageError> {
        Self::with_timeout(connection, container, DEFAULT_TIMEOUT)
    }

    /// Create a store for one container with an explicit upload deadline.
    pub fn with_timeout(
        connection: ConnectionString,
        container: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                StorageError::new(StorageErrorKind::Unavailable(format!(
                    "failed to build HTTP client: {e}"
                )))
            })?;

        Ok(Self {
            client,
            connection,
            container: container.into(),
        })
    }

    /// The public URL an object stored under `key` resolves to.
    pub fn public_url(&self, key: &StorageKey) -> String {
        format!(
            "{}/{}/{}",
            self.connection.blob_endpoint(),
            self.container,
            key
        )
    }

    /// Compute the SharedKey authorization header for a Put Blob request.
    ///
    /// String-to-sign layout per the Blob service authorization scheme:
    /// verb, the standard header slots (most empty for Put Blob), the
    /// canonicalized `x-ms-*` headers sorted by name, then the
    /// canonicalized resource `/{account}/{container}/{key}`.
    fn authorization(
        &self,
        content_length: usize,
        content_type: &str,
        date: &str,
        key: &StorageKey,
    ) -> Result<String, StorageError> {
        // A zero Content-Length signs as the empty string under API
        // versions 2015-02-21 and later.
        let content_length = if content_length == 0 {
            String::new()
        } else {
            content_length.to_string()
        };
        let canonicalized_headers = format!(
            "x-ms-blob-type:BlockBlob\nx-ms-date:{date}\nx-ms-version:{API_VERSION}\n"
        );
        let canonicalized_resource = format!(
            "/{}/{}/{}",
            self.connection.account_name, self.container, key
        );
        let string_to_sign = format!(
            "PUT\n\n\n{content_length}\n\n{content_type}\n\n\n\n\n\n\n{canonicalized_headers}{canonicalized_resource}"
        );

        let decoded_key = BASE64.decode(&self.connection.account_key).map_err(|e| {
            StorageError::new(StorageErrorKind::Unavailable(format!(
                "account key is not valid base64: {e}"
            )))
        })?;
        let mut mac = HmacSha256::new_from_slice(&decoded_key).map_err(|e| {
            StorageError::new(StorageErrorKind::Unavailable(format!(
                "account key rejected by HMAC: {e}"
            )))
        })?;
        mac.update(string_to_sign.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        Ok(format!(
            "SharedKey {}:{}",
            self.connection.account_name, signature
        ))
    }
}

#[async_trait::async_trait]
impl BlobStore for AzureBlobStore {
    #[instrument(skip(self, payload), fields(container = %self.container, key = %key, size = payload.len()))]
    async fn put(
        &self,
        key: &StorageKey,
        payload: MediaPayload,
    ) -> Result<UploadResult, StorageError> {
        let url = self.public_url(key);
        let content_type = payload.kind.mime_type();
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let authorization =
            self.authorization(payload.len(), content_type, &date, key)?;

        let response = self
            .client
            .put(&url)
            .header("Authorization", authorization)
            .header("x-ms-blob-type", "BlockBlob")
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION)
            .header("Content-Type", content_type)
            .body(payload.bytes)
            .send()
            .await
            .map_err(|e| {
                let detail = if e.is_timeout() {
                    format!("upload to {url} timed out")
                } else {
                    format!("upload to {url} failed: {e}")
                };
                StorageError::new(StorageErrorKind::Unavailable(detail))
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(url = %url, "Stored blob");
            return Ok(UploadResult { public_url: url });
        }

        let error_code = response
            .headers()
            .get("x-ms-error-code")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if status == reqwest::StatusCode::INSUFFICIENT_STORAGE
            || error_code.contains("Quota")
            || error_code.contains("Capacity")
        {
            return Err(StorageError::new(StorageErrorKind::QuotaExceeded(format!(
                "{error_code} (HTTP {status})"
            ))));
        }

        Err(StorageError::new(StorageErrorKind::Unavailable(format!(
            "Put Blob returned HTTP {status} {error_code}"
        ))))
    }
}
