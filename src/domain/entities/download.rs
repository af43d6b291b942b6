//! Outcome of downloading a resolved video to disk.

use serde::Serialize;

use crate::domain::entities::resolution::ResolutionFailure;
use crate::domain::errors::{DownloadError, FailureKind};

/// Hint attached to every download failure.
pub const DOWNLOAD_FAILURE_HINT: &str =
    "Please check your network connection and that the link is valid";

/// A video written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedVideo {
    pub message: String,
    pub file_path: String,
    pub filename: String,
    /// Size in bytes, as reported by the filesystem after the write completed.
    pub file_size: u64,
    /// Size formatted as megabytes, e.g. `"1.25 MB"`.
    pub file_size_display: String,
    pub title: String,
}

impl SavedVideo {
    pub fn new(file_path: String, filename: String, file_size: u64, title: String) -> Self {
        Self {
            message: "Video downloaded successfully".to_string(),
            file_path,
            filename,
            file_size,
            file_size_display: format_megabytes(file_size),
            title,
        }
    }
}

/// A failed download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadFailure {
    pub kind: FailureKind,
    pub message: String,
    pub details: String,
}

/// Result of the download operation.
///
/// Serialized with a `status` discriminator, like
/// [`crate::domain::entities::ResolutionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadOutcome {
    Success(SavedVideo),
    #[serde(rename = "error")]
    Failure(DownloadFailure),
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure(err: &DownloadError) -> Self {
        Self::Failure(DownloadFailure {
            kind: err.kind(),
            message: err.to_string(),
            details: DOWNLOAD_FAILURE_HINT.to_string(),
        })
    }
}

impl From<ResolutionFailure> for DownloadOutcome {
    fn from(failure: ResolutionFailure) -> Self {
        Self::Failure(DownloadFailure {
            kind: failure.kind,
            message: failure.message,
            details: DOWNLOAD_FAILURE_HINT.to_string(),
        })
    }
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
