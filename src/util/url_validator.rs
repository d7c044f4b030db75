use thiserror::Error;
use url::Url;

/// Errors that can occur during feed URL validation.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed at all.
    #[error("Invalid URL: {0}")]
    Malformed(#[from] url::ParseError),
    /// The URL uses a scheme other than http, https, or file.
    #[error("Unsupported scheme: {0} (only http/https/file allowed)")]
    UnsupportedScheme(String),
}

/// Validates a URL string for use as a feed source.
///
/// Accepts `http` and `https` for remote feeds plus `file` for local
/// fixtures; any other scheme is rejected before a fetch is attempted.
///
/// # Examples
///
/// ```
/// use feedsnap::util::validate_feed_url;
///
/// let url = validate_feed_url("https://example.com/feed.xml").unwrap();
/// assert_eq!(url.host_str(), Some("example.com"));
///
/// assert!(validate_feed_url("file:///tmp/feed.xml").is_ok());
/// assert!(validate_feed_url("ftp://example.com/feed.xml").is_err());
/// assert!(validate_feed_url("http://not a valid url").is_err());
/// ```
pub fn validate_feed_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" | "file" => Ok(url),
        scheme => Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }
}
