//! reqwest implementation of [`VideoGateway`].

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use url::Url;

use super::client::{HttpClientConfig, build_client};
use super::models::ItemInfoResponse;
use crate::domain::entities::MediaMetadata;
use crate::domain::errors::{DownloadError, ResolveError};
use crate::domain::gateways::{ByteStream, VideoGateway};
use crate::utils::url_validator::validate_http_url;

/// Gateway to the Douyin web endpoints.
///
/// Holds one pooled [`Client`]; clones share the pool.
#[derive(Debug, Clone)]
pub struct DouyinGateway {
    client: Client,
    metadata_endpoint: Url,
    resolve_timeout: Duration,
    download_timeout: Duration,
}

impl DouyinGateway {
    /// Creates a gateway with a freshly built client.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata endpoint is not an HTTP(S) URL or the
    /// client cannot be built.
    pub fn new(config: &HttpClientConfig) -> anyhow::Result<Self> {
        let client = build_client(config)?;
        Self::with_client(client, config)
    }

    /// Creates a gateway around an existing client.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata endpoint is not an HTTP(S) URL.
    pub fn with_client(client: Client, config: &HttpClientConfig) -> anyhow::Result<Self> {
        let metadata_endpoint = validate_http_url(&config.metadata_endpoint)?;

        Ok(Self {
            client,
            metadata_endpoint,
            resolve_timeout: config.resolve_timeout,
            download_timeout: config.download_timeout,
        })
    }

    fn metadata_url(&self, video_id: &str) -> Url {
        let mut url = self.metadata_endpoint.clone();
        url.query_pairs_mut().append_pair("item_ids", video_id);
        url
    }
}

fn fetch_error(err: reqwest::Error) -> ResolveError {
    ResolveError::Fetch(err.to_string())
}

#[async_trait]
impl VideoGateway for DouyinGateway {
    async fn follow_redirects(&self, url: &str) -> Result<String, ResolveError> {
        let response = self
            .client
            .head(url)
            .timeout(self.resolve_timeout)
            .send()
            .await
            .map_err(fetch_error)?;

        Ok(response.url().to_string())
    }

    async fn fetch_metadata(&self, video_id: &str) -> Result<MediaMetadata, ResolveError> {
        let url = self.metadata_url(video_id);
        tracing::debug!(%url, "Requesting item info");

        let body = self
            .client
            .get(url)
            .timeout(self.resolve_timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_error)?
            .text()
            .await
            .map_err(fetch_error)?;

        let response: ItemInfoResponse = serde_json::from_str(&body)
            .map_err(|e| ResolveError::Fetch(format!("Malformed item info response: {e}")))?;

        response.into_metadata(video_id)
    }

    async fn open_stream(&self, url: &str) -> Result<ByteStream, DownloadError> {
        let response = self
            .client
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(DownloadError::transport)?;

        Ok(Box::pin(
            response
                .bytes_stream()
                .map(|chunk| chunk.map_err(DownloadError::transport)),
        ))
    }
}
