//! Gateway trait for talking to the video platform.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::domain::entities::MediaMetadata;
use crate::domain::errors::{DownloadError, ResolveError};

/// Response body of a media download, yielded chunk by chunk.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, DownloadError>> + Send>>;

/// Upstream operations needed by the resolution and download pipeline.
///
/// Every call is a single request: implementations must not retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::DouyinGateway`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoGateway: Send + Sync {
    /// Follows redirects of `url` and returns the final location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Fetch`] on transport failures or timeouts.
    async fn follow_redirects(&self, url: &str) -> Result<String, ResolveError>;

    /// Looks up metadata for a video id.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MetadataUnavailable`] when the endpoint answers
    /// but reports no usable item, and [`ResolveError::Fetch`] on HTTP errors,
    /// malformed JSON, or transport failures.
    async fn fetch_metadata(&self, video_id: &str) -> Result<MediaMetadata, ResolveError>;

    /// Starts downloading `url` and returns its body as a stream.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Transport`] if the request fails or the
    /// server answers with a non-success status.
    async fn open_stream(&self, url: &str) -> Result<ByteStream, DownloadError>;
}
