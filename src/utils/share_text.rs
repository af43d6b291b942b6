//! Share text handling.
//!
//! The app's share button copies a line of text around the link, e.g.
//! `7.99 Look at this! https://v.douyin.com/abc123/ copy and open Douyin`.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Returns the first `http(s)://` URL embedded in `text`.
///
/// The URL runs up to the next whitespace. Returns `None` when the text
/// contains no URL.
pub fn extract_share_url(text: &str) -> Option<&str> {
    URL_PATTERN.find(text).map(|m| m.as_str())
}
