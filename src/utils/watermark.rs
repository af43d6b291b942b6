//! Watermark token substitution for play addresses.

/// Path token of the watermarked play variant.
pub const WATERMARK_TOKEN: &str = "playwm";

/// Path token of the watermark-free play variant.
pub const CLEAN_TOKEN: &str = "play";

/// Replaces the first watermarked-variant token with its clean counterpart.
///
/// This is a literal substring substitution, not URL rewriting: the token is
/// replaced wherever it first occurs, query string included. URLs without
/// the token are returned unchanged.
pub fn remove_watermark(media_url: &str) -> String {
    media_url.replacen(WATERMARK_TOKEN, CLEAN_TOKEN, 1)
}
