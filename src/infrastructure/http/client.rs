//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

/// Default browser user agent sent to the platform.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default item-info endpoint.
pub const DEFAULT_METADATA_ENDPOINT: &str = "https://www.iesdouyin.com/web/api/v2/aweme/iteminfo/";

/// Immutable settings for the upstream HTTP client.
///
/// Built once at startup; the resulting client is shared for connection
/// pooling and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub metadata_endpoint: String,
    /// Timeout for redirect resolution and metadata requests.
    pub resolve_timeout: Duration,
    /// Timeout for a whole streaming download.
    pub download_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            metadata_endpoint: DEFAULT_METADATA_ENDPOINT.to_string(),
            resolve_timeout: Duration::from_secs(10),
            download_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds a pooled client with the browser-like default headers.
///
/// Compression is negotiated by reqwest itself, so `Accept-Encoding` is not set here.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized or a header
/// value is invalid.
pub fn build_client(config: &HttpClientConfig) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("zh-CN,zh;q=0.8,zh-TW;q=0.7,zh-HK;q=0.5,en-US;q=0.3,en;q=0.2"),
    );
    headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()
}
