//! URL well-formedness checks.
//!
//! Resolved download URLs and configured endpoints must be absolute HTTP(S)
//! URLs with a host. Validation never rewrites the input.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` and checks that it is an absolute HTTP(S) URL with a host.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`, `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_http_url("https://aweme.snssdk.com/aweme/v1/play/?video_id=1").is_ok());
/// assert!(validate_http_url("ftp://example.com/file").is_err());
/// ```
pub fn validate_http_url(input: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_http_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_play_url_with_query() {
        let result =
            validate_http_url("https://aweme.snssdk.com/aweme/v1/play/?video_id=abc&ratio=720p");
        assert!(result.is_ok());
        assert_eq!(result.unwrap().host_str(), Some("aweme.snssdk.com"));
    }

    #[test]
    fn test_validate_localhost_with_port() {
        assert!(validate_http_url("http://127.0.0.1:8080/video").is_ok());
    }

    #[test]
    fn test_validate_invalid_url() {
        let result = validate_http_url("not a valid url");
        assert!(matches!(
            result.unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(matches!(
            validate_http_url("").unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_no_protocol() {
        assert!(matches!(
            validate_http_url("v.douyin.com/abc123").unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_validate_ftp_protocol() {
        assert!(matches!(
            validate_http_url("ftp://example.com/file.mp4").unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_javascript_protocol() {
        assert!(matches!(
            validate_http_url("javascript:alert('xss')").unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_data_protocol() {
        assert!(matches!(
            validate_http_url("data:text/plain,Hello").unwrap_err(),
            UrlValidationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_validate_does_not_rewrite() {
        let input = "https://cdn.example.com/a/play/?x=1";
        assert_eq!(validate_http_url(input).unwrap().as_str(), input);
    }
}
