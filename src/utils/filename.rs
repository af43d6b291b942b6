//! Output filename derivation and sanitization.

use chrono::{DateTime, Utc};

/// Extension every saved video carries.
pub const VIDEO_EXTENSION: &str = ".mp4";

/// Characters that are not allowed in filenames on common filesystems.
const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every forbidden filename character with `_`.
///
/// Path separators are among the replaced characters, so the result is
/// always a single path component.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Appends [`VIDEO_EXTENSION`] unless the name already ends with it.
pub fn ensure_video_extension(mut name: String) -> String {
    if !name.ends_with(VIDEO_EXTENSION) {
        name.push_str(VIDEO_EXTENSION);
    }
    name
}

/// Derives a filename from a video title: sanitized title, a unix-time
/// suffix, and the video extension.
///
/// # Examples
///
/// ```ignore
/// // "a/b" downloaded at unix time 1700000000
/// assert_eq!(derive_filename("a/b", now), "a_b_1700000000.mp4");
/// ```
pub fn derive_filename(title: &str, now: DateTime<Utc>) -> String {
    ensure_video_extension(format!("{}_{}", sanitize_filename(title), now.timestamp()))
}

/// Normalizes a caller-supplied filename the same way as derived ones,
/// minus the time suffix.
pub fn normalize_filename(name: &str) -> String {
    ensure_video_extension(sanitize_filename(name.trim()))
}
