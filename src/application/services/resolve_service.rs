//! Share link resolution pipeline.

use std::sync::Arc;

use crate::domain::entities::{
    DEFAULT_TITLE, MediaMetadata, ResolutionResult, ResolutionSource, ResolvedVideo,
};
use crate::domain::errors::ResolveError;
use crate::domain::gateways::VideoGateway;
use crate::utils::fallback_url::fallback_play_url;
use crate::utils::share_text::extract_share_url;
use crate::utils::url_validator::validate_http_url;
use crate::utils::video_id::extract_video_id;
use crate::utils::watermark::remove_watermark;

/// Service turning share links into watermark-free download URLs.
///
/// # Pipeline
///
/// 1. Follow redirects when the link points at a short-link host
/// 2. Extract the video id from the resulting URL
/// 3. Fetch metadata and strip the watermark token from the play address
/// 4. On metadata failure, build a fallback URL from the id
///
/// Every failure ends up as a [`ResolutionResult::Failure`]; nothing is retried.
pub struct ResolveService {
    gateway: Arc<dyn VideoGateway>,
    short_link_hosts: Vec<String>,
}

impl ResolveService {
    /// Creates a new resolve service.
    ///
    /// `short_link_hosts` lists the hosts (e.g. `v.douyin.com`) whose links
    /// are redirect-resolved before id extraction.
    pub fn new(gateway: Arc<dyn VideoGateway>, short_link_hosts: Vec<String>) -> Self {
        Self {
            gateway,
            short_link_hosts,
        }
    }

    /// Resolves a share link into a download URL.
    pub async fn get_download_link(&self, share_link: &str) -> ResolutionResult {
        let result = self.resolve(share_link).await;

        if let Err(e) = &result {
            tracing::warn!(share_link, error = %e, "Failed to resolve share link");
        }

        result.into()
    }

    /// Runs the pipeline, returning the first unrecoverable error.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::IdentifierNotFound`] when no id can be
    /// extracted; metadata is not fetched in that case. Returns
    /// [`ResolveError::Fetch`] if the resulting URL is not well-formed.
    pub async fn resolve(&self, share_link: &str) -> Result<ResolvedVideo, ResolveError> {
        let real_url = self.resolve_share_link(share_link).await;

        let video_id = extract_video_id(&real_url).ok_or(ResolveError::IdentifierNotFound)?;
        tracing::debug!(%video_id, %real_url, "Extracted video id");

        let video = match self.gateway.fetch_metadata(&video_id).await {
            Ok(metadata) => from_metadata(metadata),
            Err(e) => {
                tracing::warn!(%video_id, error = %e, "Metadata lookup failed, using fallback URL");
                fallback(&video_id, &real_url)
            }
        };

        validate_http_url(&video.download_url).map_err(|e| ResolveError::Fetch(e.to_string()))?;

        Ok(video)
    }

    /// Expands a short link by following its redirects.
    ///
    /// Only the first URL embedded in the input is requested, so pasted
    /// share text works as well as a bare link. Links on other hosts, and
    /// input without a URL, are returned unchanged. Network failures are
    /// logged and the original input is returned, so extraction still runs
    /// on it.
    pub async fn resolve_share_link(&self, share_link: &str) -> String {
        if !self.is_short_link(share_link) {
            return share_link.to_string();
        }

        let Some(url) = extract_share_url(share_link) else {
            tracing::debug!(share_link, "Short link host found but no URL to follow");
            return share_link.to_string();
        };

        match self.gateway.follow_redirects(url).await {
            Ok(real_url) => {
                tracing::debug!(share_link, %real_url, "Resolved short link");
                real_url
            }
            Err(e) => {
                tracing::warn!(share_link, error = %e, "Failed to resolve short link");
                share_link.to_string()
            }
        }
    }

    fn is_short_link(&self, link: &str) -> bool {
        self.short_link_hosts
            .iter()
            .any(|host| link.contains(host.as_str()))
    }
}

fn from_metadata(metadata: MediaMetadata) -> ResolvedVideo {
    ResolvedVideo {
        download_url: remove_watermark(&metadata.raw_media_url),
        note: format!("Video title: {}", metadata.title),
        usage_tip: "Use this link to download the video without a watermark".to_string(),
        video_id: metadata.video_id,
        title: metadata.title,
        source: ResolutionSource::Metadata,
    }
}

fn fallback(video_id: &str, real_url: &str) -> ResolvedVideo {
    tracing::debug!(%video_id, %real_url, "Building fallback play URL");

    ResolvedVideo {
        video_id: video_id.to_string(),
        title: DEFAULT_TITLE.to_string(),
        download_url: fallback_play_url(video_id),
        note: "Download link built by the fallback method; it is not verified".to_string(),
        usage_tip: "Use this link to download the video directly".to_string(),
        source: ResolutionSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ResolutionFailure;
    use crate::domain::errors::FailureKind;
    use crate::domain::gateways::MockVideoGateway;

    fn service(gateway: MockVideoGateway) -> ResolveService {
        ResolveService::new(Arc::new(gateway), vec!["v.douyin.com".to_string()])
    }

    fn metadata(url: &str) -> MediaMetadata {
        MediaMetadata::new(
            Some("cat video".to_string()),
            "7123456789".to_string(),
            url.to_string(),
        )
    }

    #[tokio::test]
    async fn test_short_link_end_to_end() {
        let mut gateway = MockVideoGateway::new();

        gateway
            .expect_follow_redirects()
            .withf(|url| url == "https://v.douyin.com/abc123/")
            .times(1)
            .returning(|_| Ok("https://www.douyin.com/video/7123456789".to_string()));

        gateway
            .expect_fetch_metadata()
            .withf(|id| id == "7123456789")
            .times(1)
            .returning(|_| {
                Ok(metadata(
                    "https://aweme.snssdk.com/aweme/v1/playwm/?video_id=v0200fg10000abc",
                ))
            });

        let result = service(gateway)
            .get_download_link("https://v.douyin.com/abc123/")
            .await;

        match result {
            ResolutionResult::Success(video) => {
                assert_eq!(
                    video.download_url,
                    "https://aweme.snssdk.com/aweme/v1/play/?video_id=v0200fg10000abc"
                );
                assert_eq!(video.title, "cat video");
                assert_eq!(video.video_id, "7123456789");
                assert_eq!(video.source, ResolutionSource::Metadata);
            }
            ResolutionResult::Failure(f) => panic!("unexpected failure: {:?}", f),
        }
    }

    #[tokio::test]
    async fn test_no_identifier_skips_fetch_and_fallback() {
        let mut gateway = MockVideoGateway::new();
        gateway.expect_follow_redirects().times(0);
        gateway.expect_fetch_metadata().times(0);

        let result = service(gateway)
            .get_download_link("https://example.com/foo")
            .await;

        assert!(matches!(
            result,
            ResolutionResult::Failure(ResolutionFailure {
                kind: FailureKind::IdentifierNotFound,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_uses_fallback() {
        let mut gateway = MockVideoGateway::new();
        gateway
            .expect_fetch_metadata()
            .times(1)
            .returning(|_| Err(ResolveError::Fetch("timed out".to_string())));

        let result = service(gateway)
            .get_download_link("https://www.douyin.com/video/7123456789")
            .await;

        match result {
            ResolutionResult::Success(video) => {
                assert!(video.download_url.contains("7123456789"));
                assert_eq!(video.download_url, fallback_play_url("7123456789"));
                assert_eq!(video.source, ResolutionSource::Fallback);
                assert_eq!(video.title, DEFAULT_TITLE);
            }
            ResolutionResult::Failure(f) => panic!("unexpected failure: {:?}", f),
        }
    }

    #[tokio::test]
    async fn test_metadata_unavailable_uses_fallback() {
        let mut gateway = MockVideoGateway::new();
        gateway
            .expect_fetch_metadata()
            .times(1)
            .returning(|_| Err(ResolveError::MetadataUnavailable));

        let result = service(gateway)
            .get_download_link("https://www.douyin.com/share?item_ids=555")
            .await;

        match result {
            ResolutionResult::Success(video) => {
                assert_eq!(video.video_id, "555");
                assert_eq!(video.source, ResolutionSource::Fallback);
            }
            ResolutionResult::Failure(f) => panic!("unexpected failure: {:?}", f),
        }
    }

    #[tokio::test]
    async fn test_redirect_failure_extracts_from_original_link() {
        let mut gateway = MockVideoGateway::new();
        gateway
            .expect_follow_redirects()
            .times(1)
            .returning(|_| Err(ResolveError::Fetch("dns error".to_string())));
        gateway
            .expect_fetch_metadata()
            .withf(|id| id == "abc123")
            .times(1)
            .returning(|_| Err(ResolveError::MetadataUnavailable));

        let result = service(gateway)
            .get_download_link("https://v.douyin.com/abc123/")
            .await;

        match result {
            ResolutionResult::Success(video) => {
                assert!(video.download_url.contains("abc123"));
            }
            ResolutionResult::Failure(f) => panic!("unexpected failure: {:?}", f),
        }
    }

    #[tokio::test]
    async fn test_share_text_follows_embedded_url() {
        let mut gateway = MockVideoGateway::new();
        gateway
            .expect_follow_redirects()
            .withf(|url| url == "https://v.douyin.com/abc123/")
            .times(1)
            .returning(|_| Ok("https://www.douyin.com/video/7123456789".to_string()));
        gateway
            .expect_fetch_metadata()
            .withf(|id| id == "7123456789")
            .times(1)
            .returning(|_| Err(ResolveError::MetadataUnavailable));

        let video = service(gateway)
            .resolve("7.99 Look at this! https://v.douyin.com/abc123/ copy and open Douyin")
            .await
            .unwrap();

        assert_eq!(video.video_id, "7123456789");
    }

    #[tokio::test]
    async fn test_short_host_without_scheme_is_not_requested() {
        let mut gateway = MockVideoGateway::new();
        gateway.expect_follow_redirects().times(0);

        let service = service(gateway);
        let link = "v.douyin.com/abc123";

        assert_eq!(service.resolve_share_link(link).await, link);
    }

    #[tokio::test]
    async fn test_long_link_is_not_redirect_resolved() {
        let mut gateway = MockVideoGateway::new();
        gateway.expect_follow_redirects().times(0);

        let service = service(gateway);
        let link = "https://www.douyin.com/video/1";

        assert_eq!(service.resolve_share_link(link).await, link);
    }

    #[tokio::test]
    async fn test_clean_play_url_is_kept() {
        let mut gateway = MockVideoGateway::new();
        gateway
            .expect_fetch_metadata()
            .returning(|_| Ok(metadata("https://cdn.example.com/play/?id=1")));

        let video = service(gateway)
            .resolve("https://www.douyin.com/video/7123456789")
            .await
            .unwrap();

        assert_eq!(video.download_url, "https://cdn.example.com/play/?id=1");
    }

    #[tokio::test]
    async fn test_malformed_play_url_is_failure() {
        let mut gateway = MockVideoGateway::new();
        gateway
            .expect_fetch_metadata()
            .returning(|_| Ok(metadata("/relative/playwm/path")));

        let result = service(gateway)
            .get_download_link("https://www.douyin.com/video/7123456789")
            .await;

        assert!(matches!(
            result,
            ResolutionResult::Failure(ResolutionFailure {
                kind: FailureKind::FetchError,
                ..
            })
        ));
    }
}
