//! Core domain entities representing the pipeline's data model.
//!
//! Entities are transient values: they are created for a single request and
//! never persisted.
//!
//! # Entity Types
//!
//! - [`MediaMetadata`] - Title and raw play address reported upstream
//! - [`ResolutionResult`] - Tagged outcome of resolving a share link
//! - [`DownloadOutcome`] - Tagged outcome of saving a video to disk

pub mod download;
pub mod media;
pub mod resolution;

pub use download::{DOWNLOAD_FAILURE_HINT, DownloadFailure, DownloadOutcome, SavedVideo};
pub use media::{DEFAULT_TITLE, MediaMetadata};
pub use resolution::{ResolutionFailure, ResolutionResult, ResolutionSource, ResolvedVideo};
