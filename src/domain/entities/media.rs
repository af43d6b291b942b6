//! Video metadata returned by the item-info endpoint.

/// Title used when upstream metadata has no description.
pub const DEFAULT_TITLE: &str = "Douyin video";

/// Metadata for a single video, as reported upstream.
///
/// `raw_media_url` is the first play address exactly as returned, still
/// pointing at the watermarked variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMetadata {
    pub title: String,
    pub video_id: String,
    pub raw_media_url: String,
}

impl MediaMetadata {
    /// Creates metadata, substituting [`DEFAULT_TITLE`] for a missing or blank title.
    pub fn new(title: Option<String>, video_id: String, raw_media_url: String) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            title,
            video_id,
            raw_media_url,
        }
    }
}
