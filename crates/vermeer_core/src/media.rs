//! Media kind and payload types.

/// Kind of post media.
///
/// Mutually exclusive: a post is either an image or a video, selected by the
/// provider's `is_video` flag. The kind drives both the stored content type
/// and the storage key extension; bytes are never sniffed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum MediaKind {
    /// JPEG still image
    #[display("image")]
    Image,
    /// MP4 video
    #[display("video")]
    Video,
}

impl MediaKind {
    /// MIME type recorded on the stored blob.
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/jpeg",
            MediaKind::Video => "video/mp4",
        }
    }

    /// File extension used in storage keys.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video => "mp4",
        }
    }

    /// Select the kind from the provider's video flag.
    pub fn from_is_video(is_video: bool) -> Self {
        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A downloaded media payload.
///
/// Owned by the media fetcher and moved by value into the blob uploader;
/// dropped as soon as the upload completes so large videos never outlive
/// their request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPayload {
    /// Raw media bytes
    pub bytes: Vec<u8>,
    /// Kind of the payload, as declared upstream
    pub kind: MediaKind,
}

impl MediaPayload {
    /// Create a payload from downloaded bytes and the upstream-declared kind.
    pub fn new(bytes: Vec<u8>, kind: MediaKind) -> Self {
        Self { bytes, kind }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
