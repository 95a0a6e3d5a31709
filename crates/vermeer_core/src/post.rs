//! Post reference and metadata types.

use serde::{Deserialize, Serialize};

/// A resolved post identity.
///
/// Produced by the resolver from caller input and discarded when the request
/// completes. The raw URL is retained only for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostReference {
    /// The caller-supplied URL, untouched
    pub raw_url: String,
    /// The shortcode extracted from the URL path
    pub shortcode: String,
}

/// Metadata for a single upstream post.
///
/// Owned by the upstream client for the duration of one request and
/// read-only downstream. `is_video` decides which source URL the provider
/// exposed; exactly one of the two is carried here as `media_source_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Post caption, empty string when the post has none
    pub caption: String,
    /// Like count as reported by the provider
    pub like_count: i64,
    /// Comment count as reported by the provider
    pub comment_count: i64,
    /// Whether the post's media is a video
    pub is_video: bool,
    /// Source URL of the media payload, not yet downloaded
    pub media_source_url: String,
}
