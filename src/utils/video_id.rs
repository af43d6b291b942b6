//! Video id extraction from canonical or share URLs.

use regex::Regex;
use std::sync::LazyLock;

/// Id patterns in priority order. Path-based shapes come before the generic
/// query-parameter ones; the first pattern that matches anywhere in the URL wins.
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        Regex::new(r"video/(\d+)").unwrap(),
        Regex::new(r"/([a-zA-Z0-9]{11})/?").unwrap(),
        Regex::new(r"v\.douyin\.com/([a-zA-Z0-9]+)").unwrap(),
        Regex::new(r"aweme_id=([0-9]+)").unwrap(),
        Regex::new(r"item_ids=([0-9]+)").unwrap(),
    ]
});

/// Extracts the video id from a URL.
///
/// # Patterns
///
/// 1. `video/<digits>` path segment
/// 2. `/` followed by 11 alphanumeric characters
/// 3. `v.douyin.com/<alphanumeric>` short-link segment
/// 4. `aweme_id=<digits>` query parameter
/// 5. `item_ids=<digits>` query parameter
///
/// Returns `None` when no pattern matches.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     extract_video_id("https://www.douyin.com/video/7123456789").as_deref(),
///     Some("7123456789")
/// );
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
