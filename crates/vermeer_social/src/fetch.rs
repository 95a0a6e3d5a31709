//! Binary media download.

use std::time::Duration;
use tracing::{debug, instrument};
use vermeer_core::{MediaKind, MediaPayload};
use vermeer_error::{FetchError, FetchErrorKind};

/// Default deadline for one media download.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default maximum payload size (50 MB).
pub const DEFAULT_MAX_BYTES: usize = 50 * 1024 * 1024;

/// Downloads the binary payload behind a media source URL.
///
/// One GET, no retries: a failed download is the terminal condition for the
/// whole pipeline. The payload's content type comes from the
/// upstream-declared [`MediaKind`], never from sniffing bytes. The body is
/// streamed against a size cap so an oversized object aborts early instead
/// of exhausting memory.
#[derive(Debug, Clone)]
pub struct MediaFetcher {
    client: reqwest::Client,
    max_bytes: usize,
}

impl MediaFetcher {
    /// Create a fetcher with the given deadline and size cap.
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                FetchError::new(FetchErrorKind::DownloadFailed(format!(
                    "failed to build HTTP client: {e}"
                )))
            })?;
        Ok(Self { client, max_bytes })
    }

    /// Download the payload at `url`, tagging it with the declared kind.
    ///
    /// # Errors
    ///
    /// - `DownloadFailed` on transport errors, timeouts, or any non-2xx
    ///   status
    /// - `TooLarge` when the body exceeds the configured cap
    #[instrument(skip(self))]
    pub async fn download(
        &self,
        url: &str,
        kind: MediaKind,
    ) -> Result<MediaPayload, FetchError> {
        let mut response = self.client.get(url).send().await.map_err(|e| {
            let detail = if e.is_timeout() {
                format!("GET {url} timed out")
            } else {
                format!("GET {url} failed: {e}")
            };
            FetchError::new(FetchErrorKind::DownloadFailed(detail))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(FetchErrorKind::DownloadFailed(format!(
                "GET {url} returned HTTP {status}"
            ))));
        }

        if let Some(length) = response.content_length() {
            if length as usize > self.max_bytes {
                return Err(FetchError::new(FetchErrorKind::TooLarge(format!(
                    "{length} bytes declared, cap is {}",
                    self.max_bytes
                ))));
            }
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| {
            FetchError::new(FetchErrorKind::DownloadFailed(format!(
                "reading body of {url} failed: {e}"
            )))
        })? {
            if bytes.len() + chunk.len() > self.max_bytes {
                return Err(FetchError::new(FetchErrorKind::TooLarge(format!(
                    "body exceeded cap of {} bytes",
                    self.max_bytes
                ))));
            }
            bytes.extend_from_slice(&chunk);
        }

        debug!(size = bytes.len(), kind = %kind, "Downloaded media payload");
        Ok(MediaPayload::new(bytes, kind))
    }
}
