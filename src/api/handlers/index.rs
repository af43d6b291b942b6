//! Handler for the service description endpoint.

use axum::Json;
use std::collections::BTreeMap;

use crate::api::dto::index::{EndpointUsage, IndexResponse};

/// Describes the service and how to call it.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    let endpoints = BTreeMap::from([
        ("/get_download_link", "POST - resolve a share link into a download URL"),
        ("/download_video", "POST - download the video to the server"),
        ("/health", "GET - liveness check"),
    ]);

    let usage = BTreeMap::from([
        (
            "get_download_link",
            EndpointUsage {
                method: "POST",
                body: BTreeMap::from([("share_link", "Douyin share link")]),
                description: "Returns a watermark-free video download URL",
            },
        ),
        (
            "download_video",
            EndpointUsage {
                method: "POST",
                body: BTreeMap::from([
                    ("share_link", "Douyin share link"),
                    ("filename", "Optional file name"),
                ]),
                description: "Downloads the video file on the server",
            },
        ),
    ]);

    Json(IndexResponse {
        message: "Douyin video downloader API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
        usage,
    })
}
