//! DTOs for the video download endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to download the video behind a share link.
#[derive(Debug, Deserialize, Validate)]
pub struct DownloadRequest {
    /// Douyin share link, short or canonical.
    #[validate(
        required(message = "Please provide a Douyin share link"),
        length(min = 1, message = "Share link must not be empty")
    )]
    pub share_link: Option<String>,

    /// Optional output filename; `.mp4` is appended when missing.
    #[validate(length(max = 200, message = "Filename must be at most 200 characters"))]
    pub filename: Option<String>,
}

impl DownloadRequest {
    /// Share link after validation, trimmed.
    pub fn share_link(&self) -> &str {
        self.share_link.as_deref().unwrap_or_default().trim()
    }
}
