//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod download;
pub mod health;
pub mod index;
pub mod link;

pub use download::download_video_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use link::get_download_link_handler;
