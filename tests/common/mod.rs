#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use douyin_fetch::domain::entities::MediaMetadata;
use douyin_fetch::domain::errors::{DownloadError, ResolveError};
use douyin_fetch::domain::gateways::{ByteStream, VideoGateway};
use douyin_fetch::state::AppState;
use futures::stream;
use std::path::Path;
use std::sync::Arc;

pub const VIDEO_ID: &str = "7123456789";
pub const SHORT_LINK: &str = "https://v.douyin.com/abc123/";
pub const WATERMARKED_URL: &str = "https://aweme.snssdk.com/aweme/v1/playwm/?video_id=v0200abc";
pub const CLEAN_URL: &str = "https://aweme.snssdk.com/aweme/v1/play/?video_id=v0200abc";

/// In-memory gateway with canned upstream answers.
#[derive(Clone)]
pub struct StubGateway {
    /// Final location of short links; `None` makes redirect resolution fail.
    pub redirect_to: Option<String>,
    /// Title reported by the item-info endpoint; `None` means metadata is unavailable.
    pub title: Option<String>,
    /// Body served for downloads; `None` makes the download fail with HTTP 403.
    pub body: Option<Vec<u8>>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            redirect_to: Some(format!("https://www.douyin.com/video/{VIDEO_ID}")),
            title: Some("cat video".to_string()),
            body: Some(b"fake mp4 data".to_vec()),
        }
    }
}

#[async_trait]
impl VideoGateway for StubGateway {
    async fn follow_redirects(&self, url: &str) -> Result<String, ResolveError> {
        // reqwest refuses to build a request for anything but a bare URL.
        if url.contains(char::is_whitespace) {
            return Err(ResolveError::Fetch("builder error".to_string()));
        }

        self.redirect_to
            .clone()
            .ok_or_else(|| ResolveError::Fetch("connection refused".to_string()))
    }

    async fn fetch_metadata(&self, video_id: &str) -> Result<MediaMetadata, ResolveError> {
        match &self.title {
            Some(title) => Ok(MediaMetadata::new(
                Some(title.clone()),
                video_id.to_string(),
                WATERMARKED_URL.to_string(),
            )),
            None => Err(ResolveError::MetadataUnavailable),
        }
    }

    async fn open_stream(&self, _url: &str) -> Result<ByteStream, DownloadError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| DownloadError::transport("HTTP status client error (403 Forbidden)"))?;

        let chunks: Vec<Result<Bytes, DownloadError>> = body
            .chunks(4096)
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect();

        Ok(Box::pin(stream::iter(chunks)))
    }
}

pub fn create_test_state(gateway: StubGateway, download_dir: &Path) -> AppState {
    AppState::new(
        Arc::new(gateway),
        vec!["v.douyin.com".to_string()],
        download_dir.to_path_buf(),
    )
}
