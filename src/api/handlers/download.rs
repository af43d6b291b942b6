//! Handler for the video download endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::download::DownloadRequest;
use crate::domain::entities::DownloadOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a share link and saves the video on the server.
///
/// # Endpoint
///
/// `POST /download_video`
///
/// # Request Body
///
/// ```json
/// { "share_link": "https://v.douyin.com/abc123/", "filename": "my clip" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "message": "Video downloaded successfully",
///   "file_path": "/srv/videos/my clip.mp4",
///   "filename": "my clip.mp4",
///   "file_size": 1310720,
///   "file_size_display": "1.25 MB",
///   "title": "cat video"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for missing input and for failed downloads; the
/// failure body carries `kind`, `message`, and a `details` hint.
pub async fn download_video_handler(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DownloadOutcome>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let share_link = payload.share_link();
    if share_link.is_empty() {
        return Err(AppError::missing_share_link("Share link must not be empty"));
    }

    let outcome = state
        .download_service
        .download_video(share_link, payload.filename.as_deref())
        .await;

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(outcome)))
}
