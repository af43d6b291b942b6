//! Pure helpers used by the resolution and download pipeline.
//!
//! - [`video_id`] - Video id extraction from URLs
//! - [`watermark`] - Watermark token substitution
//! - [`fallback_url`] - Template-built play URL
//! - [`filename`] - Output filename derivation and sanitization
//! - [`share_text`] - Link extraction from pasted share text
//! - [`url_validator`] - HTTP(S) URL well-formedness checks

pub mod fallback_url;
pub mod filename;
pub mod share_text;
pub mod url_validator;
pub mod video_id;
pub mod watermark;
