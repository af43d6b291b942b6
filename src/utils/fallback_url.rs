//! Best-effort play URL built directly from a video id.

/// Quality tag embedded in fallback URLs.
pub const FALLBACK_RATIO: &str = "720p";

/// Line index embedded in fallback URLs.
pub const FALLBACK_LINE: u32 = 0;

/// Builds a direct play URL for `video_id` from a fixed template.
///
/// The template guesses the internal media-serving path; the result is never
/// verified and may not resolve.
pub fn fallback_play_url(video_id: &str) -> String {
    format!(
        "https://aweme.snssdk.com/aweme/v1/play/?video_id=v0200fg10000{}&ratio={}&line={}",
        video_id, FALLBACK_RATIO, FALLBACK_LINE
    )
}
