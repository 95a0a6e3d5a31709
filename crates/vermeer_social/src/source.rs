//! Post source trait definition.

use crate::InstagramError;
use vermeer_core::PostMetadata;

/// Trait for upstream post metadata lookup.
///
/// The pipeline depends on this seam rather than on a concrete client, so
/// fakes can stand in for the provider in tests. One implementation exists
/// in production: [`crate::InstagramClient`].
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    /// Resolve a shortcode to post metadata and a single media source URL.
    ///
    /// The media itself is not downloaded here; the returned metadata
    /// carries the one source URL selected by the provider's video flag.
    ///
    /// # Errors
    ///
    /// - `PostNotFound` when the provider reports no such post
    /// - `PrivatePost` when access is restricted and no valid session exists
    /// - `Unavailable` when the provider is unreachable or failing
    async fn fetch_post(&self, shortcode: &str) -> Result<PostMetadata, InstagramError>;
}
