//! Application layer services implementing the pipeline.
//!
//! Services orchestrate the pure helpers in [`crate::utils`] and the
//! [`crate::domain::gateways::VideoGateway`] trait, and provide a clean API
//! for HTTP handlers and the command-line front end.
//!
//! # Available Services
//!
//! - [`services::resolve_service::ResolveService`] - Share link to download URL
//! - [`services::download_service::DownloadService`] - Download URL to local file

pub mod services;
