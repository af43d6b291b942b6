//! Error taxonomy for the resolution and download pipeline.
//!
//! Pipeline stages return these errors through `Result`. The services turn
//! them into typed failure results before anything reaches the HTTP layer.

use serde::Serialize;

/// Machine-readable failure category carried by failure results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    IdentifierNotFound,
    MetadataUnavailable,
    FetchError,
    DownloadTransportError,
    FilesystemError,
}

/// Errors raised while turning a share link into a download URL.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("Could not extract a video id from the link, please check that the link is correct")]
    IdentifierNotFound,

    #[error("Video metadata is unavailable")]
    MetadataUnavailable,

    #[error("Metadata request failed: {0}")]
    Fetch(String),
}

impl ResolveError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::IdentifierNotFound => FailureKind::IdentifierNotFound,
            Self::MetadataUnavailable => FailureKind::MetadataUnavailable,
            Self::Fetch(_) => FailureKind::FetchError,
        }
    }
}

/// Errors raised while streaming a resolved video to disk.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("Download failed: {0}")]
    Transport(String),

    #[error("Failed to write video file: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl DownloadError {
    pub fn transport(err: impl ToString) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::DownloadTransportError,
            Self::Filesystem(_) => FailureKind::FilesystemError,
        }
    }
}
