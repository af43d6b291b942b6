//! Video download service.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;

use crate::application::services::ResolveService;
use crate::domain::entities::{DownloadOutcome, ResolutionResult, ResolvedVideo, SavedVideo};
use crate::domain::errors::DownloadError;
use crate::domain::gateways::VideoGateway;
use crate::infrastructure::storage::write_stream;
use crate::utils::filename::{derive_filename, normalize_filename};

/// Service that resolves a share link and streams the video to disk.
pub struct DownloadService {
    resolver: Arc<ResolveService>,
    gateway: Arc<dyn VideoGateway>,
    download_dir: PathBuf,
}

impl DownloadService {
    /// Creates a new download service writing into `download_dir`.
    pub fn new(
        resolver: Arc<ResolveService>,
        gateway: Arc<dyn VideoGateway>,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            resolver,
            gateway,
            download_dir,
        }
    }

    /// Resolves `share_link` and downloads the video.
    ///
    /// A resolution failure is returned as a download failure with the same
    /// kind and message.
    pub async fn download_video(&self, share_link: &str, filename: Option<&str>) -> DownloadOutcome {
        let video = match self.resolver.get_download_link(share_link).await {
            ResolutionResult::Success(video) => video,
            ResolutionResult::Failure(failure) => return failure.into(),
        };

        match self.save(&video, filename).await {
            Ok(saved) => DownloadOutcome::Success(saved),
            Err(e) => {
                tracing::warn!(url = %video.download_url, error = %e, "Video download failed");
                DownloadOutcome::failure(&e)
            }
        }
    }

    /// Streams an already resolved video into the download directory.
    ///
    /// # Filename
    ///
    /// - Caller-supplied names are sanitized and get a `.mp4` extension
    /// - Otherwise the name is derived from the title plus a unix-time suffix
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Transport`] for network failures and
    /// [`DownloadError::Filesystem`] for local write failures. A partially
    /// written file is not removed.
    ///
    /// The reported `file_path` is absolute even when the download
    /// directory is configured relative to the working directory.
    pub async fn save(
        &self,
        video: &ResolvedVideo,
        filename: Option<&str>,
    ) -> Result<SavedVideo, DownloadError> {
        let filename = match filename.filter(|name| !name.trim().is_empty()) {
            Some(name) => normalize_filename(name),
            None => derive_filename(&video.title, Utc::now()),
        };
        let file_path = std::path::absolute(&self.download_dir)?.join(&filename);

        let stream = self.gateway.open_stream(&video.download_url).await?;
        let file_size = write_stream(stream, &file_path).await?;

        tracing::info!(path = %file_path.display(), file_size, "Video downloaded");

        Ok(SavedVideo::new(
            file_path.display().to_string(),
            filename,
            file_size,
            video.title.clone(),
        ))
    }
}
