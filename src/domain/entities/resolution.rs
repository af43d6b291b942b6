//! Outcome of resolving a share link.

use serde::Serialize;

use crate::domain::errors::{FailureKind, ResolveError};

/// Where a download URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Play address reported by the item-info endpoint, watermark token removed.
    Metadata,
    /// URL built from a fixed template; not verified upstream.
    Fallback,
}

/// A successfully resolved video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVideo {
    pub video_id: String,
    pub title: String,
    pub download_url: String,
    /// Human-readable description of how the URL was obtained.
    pub note: String,
    pub usage_tip: String,
    pub source: ResolutionSource,
}

/// A failed resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Result of the link resolution pipeline.
///
/// Serialized with a `status` discriminator: `"success"` or `"error"`.
///
/// # Example
///
/// ```json
/// {
///   "status": "success",
///   "video_id": "7123456789",
///   "title": "cat video",
///   "download_url": "https://example.com/aweme/v1/play/?video_id=abc",
///   "note": "Video title: cat video",
///   "usage_tip": "Use this link to download the video without a watermark",
///   "source": "metadata"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionResult {
    Success(ResolvedVideo),
    #[serde(rename = "error")]
    Failure(ResolutionFailure),
}

impl ResolutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure(err: &ResolveError) -> Self {
        Self::Failure(ResolutionFailure {
            kind: err.kind(),
            message: err.to_string(),
        })
    }
}

impl From<Result<ResolvedVideo, ResolveError>> for ResolutionResult {
    fn from(result: Result<ResolvedVideo, ResolveError>) -> Self {
        match result {
            Ok(video) => Self::Success(video),
            Err(err) => Self::failure(&err),
        }
    }
}
