//! Object storage for the Vermeer media relay service.
//!
//! This crate persists downloaded media payloads under collision-resistant
//! keys and hands back publicly resolvable URLs. The [`BlobStore`] trait is
//! the seam the pipeline depends on; [`AzureBlobStore`] is the production
//! backend, speaking the Azure Blob REST protocol (Put Blob with SharedKey
//! request signing) directly over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use vermeer_core::{MediaKind, MediaPayload, StorageKey};
//! use vermeer_storage::{AzureBlobStore, BlobStore, ConnectionString};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = ConnectionString::parse(
//!     "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=a2V5;EndpointSuffix=core.windows.net",
//! )?;
//! let store = AzureBlobStore::new(connection, "instagram")?;
//!
//! let key = StorageKey::generate("ABC123", MediaKind::Image);
//! let payload = MediaPayload::new(vec![0xFF; 200], MediaKind::Image);
//! let uploaded = store.put(&key, payload).await?;
//! println!("public URL: {}", uploaded.public_url);
//! # Ok(())
//! # }
//! ```

mod azure;
mod connection;

pub use azure::AzureBlobStore;
pub use connection::ConnectionString;
pub use vermeer_error::{StorageError, StorageErrorKind};

use vermeer_core::{MediaPayload, StorageKey};

/// Result of one successful upload.
///
/// The URL shape `{endpoint}/{container}/{key}` is a stable contract;
/// clients cache and re-derive these URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UploadResult {
    /// Publicly resolvable URL of the stored object
    pub public_url: String,
}

/// Trait for pluggable blob storage backends.
///
/// Implementations persist the binary payload under the computed key and
/// produce the public URL. Implementations must be safe for concurrent use
/// from many requests; the service constructs one store at startup and
/// shares it.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist `payload` under `key` and return its public URL.
    ///
    /// Overwrite semantics: an existing object under the same key is
    /// replaced. Keys are unique per upload by construction, so overwrite
    /// only triggers under adversarial key reuse.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on connectivity, credential, or unexpected backend
    ///   errors
    /// - `QuotaExceeded` when the backend reports a capacity limit
    async fn put(&self, key: &StorageKey, payload: MediaPayload)
    -> Result<UploadResult, StorageError>;
}
