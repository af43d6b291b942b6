//! Business logic services for the application layer.

pub mod download_service;
pub mod resolve_service;

pub use download_service::DownloadService;
pub use resolve_service::ResolveService;
