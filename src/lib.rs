//! # Douyin Fetch
//!
//! A small service that turns Douyin share links into watermark-free video
//! URLs and optionally downloads the video, built with Axum and reqwest.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Result types, failure kinds, and the upstream gateway trait
//! - **Application Layer** ([`application`]) - Resolution and download pipelines
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest gateway and file writer
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Pipeline
//!
//! 1. Short links (`v.douyin.com`) are resolved by following redirects
//! 2. The numeric video id is extracted from the final URL
//! 3. Item metadata is fetched and the `playwm` URL is rewritten to `play`
//! 4. If metadata is unavailable a fallback play URL is built from the id
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:5000/get_download_link \
//!   -H 'content-type: application/json' \
//!   -d '{"share_link": "https://v.douyin.com/abc123/"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DownloadService, ResolveService};
    pub use crate::domain::entities::{DownloadOutcome, ResolutionResult, ResolvedVideo, SavedVideo};
    pub use crate::domain::errors::{DownloadError, FailureKind, ResolveError};
    pub use crate::domain::gateways::{ByteStream, VideoGateway};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
