//! Storage key generation.

use crate::MediaKind;
use uuid::Uuid;

/// The unique name under which one uploaded media object is stored.
///
/// Rendered as `{shortcode}_{nonce}.{ext}` where the nonce is 32 hex chars
/// of a v4 UUID. The nonce guarantees that concurrent uploads for the same
/// shortcode never collide; it is not a content hash, so repeated fetches of
/// the same post store distinct objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    /// Shortcode of the source post
    pub shortcode: String,
    /// 128-bit random nonce, lowercase hex
    pub nonce: String,
    /// File extension matching the payload kind
    pub extension: &'static str,
}

impl StorageKey {
    /// Generate a fresh key for one upload.
    pub fn generate(shortcode: &str, kind: MediaKind) -> Self {
        Self {
            shortcode: shortcode.to_string(),
            nonce: Uuid::new_v4().simple().to_string(),
            extension: kind.extension(),
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}.{}", self.shortcode, self.nonce, self.extension)
    }
}
