//! API route configuration.

use crate::api::handlers::{download_video_handler, get_download_link_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Pipeline routes.
///
/// # Endpoints
///
/// - `POST /get_download_link` - Resolve a share link into a download URL
/// - `POST /download_video`    - Resolve and save the video on the server
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get_download_link", post(get_download_link_handler))
        .route("/download_video", post(download_video_handler))
}
