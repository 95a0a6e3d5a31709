//! JSON deserialization models for the Instagram web API.
//!
//! These models cover the subset of the post-info envelope the pipeline
//! consumes. Fields the service never reads are left out; serde ignores
//! them on decode.

use crate::{InstagramError, InstagramErrorKind, InstagramResult};
use serde::Deserialize;
use vermeer_core::PostMetadata;

/// Top-level post-info envelope.
///
/// A public post carries `graphql.shortcode_media`; a restricted post
/// answered anonymously comes back as an empty object or an explicit
/// `require_login` marker.
#[derive(Debug, Clone, Deserialize)]
pub struct PostInfoResponse {
    /// GraphQL payload wrapper, absent for restricted posts
    #[serde(default)]
    pub graphql: Option<Graphql>,
    /// Login-wall marker on restricted responses
    #[serde(default)]
    pub require_login: Option<bool>,
}

/// GraphQL payload wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Graphql {
    /// The post node itself
    #[serde(default)]
    pub shortcode_media: Option<ShortcodeMedia>,
}

/// The post node of the post-info envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortcodeMedia {
    /// Whether the media is a video
    pub is_video: bool,
    /// Still image source URL (always present; the preview frame for videos)
    pub display_url: String,
    /// Video source URL, present when `is_video`
    #[serde(default)]
    pub video_url: Option<String>,
    /// Caption edge list
    #[serde(default)]
    pub edge_media_to_caption: EdgeList,
    /// Like count edge
    #[serde(default)]
    pub edge_media_preview_like: CountEdge,
    /// Comment count edge
    #[serde(default)]
    pub edge_media_to_comment: CountEdge,
}

/// Edge list carrying text nodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgeList {
    /// Edge entries
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// One edge wrapping a node.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge {
    /// The wrapped node
    pub node: TextNode,
}

/// A text-carrying node.
#[derive(Debug, Clone, Deserialize)]
pub struct TextNode {
    /// Node text
    #[serde(default)]
    pub text: String,
}

/// An edge carrying only a count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountEdge {
    /// The count value
    #[serde(default)]
    pub count: i64,
}

impl ShortcodeMedia {
    /// Convert the wire model into domain metadata.
    ///
    /// Selects exactly one media source URL: `video_url` when `is_video`,
    /// `display_url` otherwise. A video node without a `video_url` is a
    /// malformed response.
    pub fn into_metadata(self, shortcode: &str) -> InstagramResult<PostMetadata> {
        let media_source_url = if self.is_video {
            self.video_url.ok_or_else(|| {
                InstagramError::new(InstagramErrorKind::MalformedResponse(format!(
                    "video post {shortcode} has no video_url"
                )))
            })?
        } else {
            self.display_url
        };

        let caption = self
            .edge_media_to_caption
            .edges
            .into_iter()
            .next()
            .map(|edge| edge.node.text)
            .unwrap_or_default();

        Ok(PostMetadata {
            caption,
            like_count: self.edge_media_preview_like.count,
            comment_count: self.edge_media_to_comment.count,
            is_video: self.is_video,
            media_source_url,
        })
    }
}

/// Login response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the session was established
    #[serde(default)]
    pub authenticated: bool,
    /// Provider status string
    #[serde(default)]
    pub status: String,
}
