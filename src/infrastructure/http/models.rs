//! Wire format of the item-info endpoint.

use serde::Deserialize;

use crate::domain::entities::MediaMetadata;
use crate::domain::errors::ResolveError;

#[derive(Debug, Deserialize)]
pub(crate) struct ItemInfoResponse {
    pub status_code: Option<i64>,
    pub item_list: Option<Vec<ItemInfo>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemInfo {
    pub desc: Option<String>,
    pub aweme_id: Option<String>,
    pub video: Option<VideoInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoInfo {
    pub play_addr: Option<PlayAddr>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayAddr {
    #[serde(default)]
    pub url_list: Vec<String>,
}

impl ItemInfoResponse {
    /// Extracts metadata from the first item.
    ///
    /// The response is usable when `status_code` is 0 and the first item
    /// carries at least one play address. `aweme_id` falls back to the id
    /// that was requested.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MetadataUnavailable`] otherwise.
    pub fn into_metadata(self, requested_id: &str) -> Result<MediaMetadata, ResolveError> {
        if self.status_code != Some(0) {
            return Err(ResolveError::MetadataUnavailable);
        }

        let item = self
            .item_list
            .and_then(|items| items.into_iter().next())
            .ok_or(ResolveError::MetadataUnavailable)?;

        let raw_media_url = item
            .video
            .and_then(|v| v.play_addr)
            .and_then(|p| p.url_list.into_iter().next())
            .ok_or(ResolveError::MetadataUnavailable)?;

        let video_id = item
            .aweme_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| requested_id.to_string());

        Ok(MediaMetadata::new(item.desc, video_id, raw_media_url))
    }
}
