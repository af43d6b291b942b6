//! DTOs for the download link endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to resolve a share link.
#[derive(Debug, Deserialize, Validate)]
pub struct ShareLinkRequest {
    /// Douyin share link, short or canonical.
    #[validate(
        required(message = "Please provide a Douyin share link"),
        length(min = 1, message = "Share link must not be empty")
    )]
    pub share_link: Option<String>,
}

impl ShareLinkRequest {
    /// Share link after validation, trimmed.
    pub fn share_link(&self) -> &str {
        self.share_link.as_deref().unwrap_or_default().trim()
    }
}
