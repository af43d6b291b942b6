//! Handler for the download link endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::link::ShareLinkRequest;
use crate::domain::entities::ResolutionResult;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a share link into a watermark-free download URL.
///
/// # Endpoint
///
/// `POST /get_download_link`
///
/// # Request Body
///
/// ```json
/// { "share_link": "https://v.douyin.com/abc123/" }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: `status: "success"` with `download_url`
/// - **400 Bad Request**: missing or empty `share_link`, or `status: "error"`
///   when the link could not be resolved
pub async fn get_download_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShareLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResolutionResult>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let share_link = payload.share_link();
    if share_link.is_empty() {
        return Err(AppError::missing_share_link("Share link must not be empty"));
    }

    let result = state.resolve_service.get_download_link(share_link).await;

    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(result)))
}
