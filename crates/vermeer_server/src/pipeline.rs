//! The fetch pipeline orchestrator.

use std::sync::Arc;
use tracing::{debug, instrument};
use vermeer_core::{MediaKind, PostMetadata, ShortcodeResolver, StorageKey};
use vermeer_error::PipelineError;
use vermeer_social::{MediaFetcher, PostSource};
use vermeer_storage::BlobStore;

/// The assembled result of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPost {
    /// Public URL of the re-hosted media
    pub media_url: String,
    /// Metadata retrieved from the upstream provider
    pub metadata: PostMetadata,
}

/// Sequences one post fetch: resolve, look up metadata, download media,
/// name the asset, upload, assemble.
///
/// The run is linear with no back-edges; the first failing stage
/// short-circuits the rest and the caller gets either the full result or a
/// single [`PipelineError`], never a partial success. Service objects are
/// injected once at startup and shared across requests.
pub struct FetchPipeline {
    resolver: ShortcodeResolver,
    source: Arc<dyn PostSource>,
    fetcher: MediaFetcher,
    store: Arc<dyn BlobStore>,
}

impl FetchPipeline {
    /// Assemble a pipeline from its service objects.
    pub fn new(
        source: Arc<dyn PostSource>,
        fetcher: MediaFetcher,
        store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            resolver: ShortcodeResolver::new(),
            source,
            fetcher,
            store,
        }
    }

    /// Run the pipeline for one caller-supplied URL.
    ///
    /// # Errors
    ///
    /// Each stage's failure arrives as a [`PipelineError`] carrying the
    /// taxonomy kind for that stage; nothing downstream of a failed stage
    /// runs.
    #[instrument(skip(self))]
    pub async fn run(&self, raw_url: &str) -> Result<FetchedPost, PipelineError> {
        let post = self.resolver.resolve(raw_url)?;
        debug!(shortcode = %post.shortcode, "Resolved post URL");

        let metadata = self.source.fetch_post(&post.shortcode).await?;

        let kind = MediaKind::from_is_video(metadata.is_video);
        let payload = self
            .fetcher
            .download(&metadata.media_source_url, kind)
            .await?;

        let key = StorageKey::generate(&post.shortcode, kind);
        let uploaded = self.store.put(&key, payload).await?;

        debug!(
            shortcode = %post.shortcode,
            media_url = %uploaded.public_url,
            "Pipeline completed"
        );

        Ok(FetchedPost {
            media_url: uploaded.public_url,
            metadata,
        })
    }
}
