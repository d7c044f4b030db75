use futures::StreamExt;
use std::time::Duration;
use url::Url;

use crate::config::FetchConfig;
use crate::error::{ErrorCode, PipelineError, Result};
use crate::util::validate_feed_url;

/// Upper bound on response body size. A feed larger than this is refused
/// rather than buffered.
const MAX_FEED_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// Retrieves raw feed bytes from http/https URLs, with a file fallback for
/// local fixtures.
///
/// A single attempt per call, no retries at this layer; retry policy is a
/// caller concern.
pub struct FeedFetcher {
    client: reqwest::Client,
}

impl FeedFetcher {
    /// Build a fetcher with the given transport settings.
    ///
    /// The client enforces a connect timeout and an overall request
    /// timeout, follows redirects (limit 10), and identifies itself via
    /// the configured `User-Agent`.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                PipelineError::new(
                    ErrorCode::FetchError,
                    format!("Failed to build HTTP client: {e}"),
                )
            })?;

        Ok(Self { client })
    }

    /// Parse and scheme-check a feed URL without touching the network.
    ///
    /// # Errors
    ///
    /// `INVALID_URL` for unparseable input or a scheme other than
    /// http/https/file, with the offending input in the message.
    pub fn validate(&self, url_str: &str) -> Result<Url> {
        validate_feed_url(url_str).map_err(|e| {
            PipelineError::new(ErrorCode::InvalidUrl, format!("{e}. Received: {url_str}"))
        })
    }

    /// Retrieve the raw bytes behind a validated URL.
    ///
    /// # Errors
    ///
    /// `FETCH_ERROR` for any transport failure, a non-2xx HTTP status, an
    /// oversized body, or a local file that cannot be read.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        match url.scheme() {
            "file" => self.fetch_file(url).await,
            _ => self.fetch_http(url).await,
        }
    }

    async fn fetch_http(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!(url = %url, "Fetching feed");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            PipelineError::new(
                ErrorCode::FetchError,
                format!("Failed to fetch feed from URI. Network or server error: {e}"),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::new(
                ErrorCode::FetchError,
                format!(
                    "Failed to fetch feed. HTTP status code: {}",
                    status.as_u16()
                ),
            ));
        }

        read_limited_bytes(response, MAX_FEED_BYTES).await
    }

    async fn fetch_file(&self, url: &Url) -> Result<Vec<u8>> {
        let path = url.to_file_path().map_err(|_| {
            PipelineError::new(
                ErrorCode::InvalidUrl,
                format!("The provided URL is malformed: {url}"),
            )
        })?;

        tracing::debug!(path = %path.display(), "Reading feed from file");

        tokio::fs::read(&path).await.map_err(|e| {
            PipelineError::new(
                ErrorCode::FetchError,
                format!("Failed to read feed from file {}: {}", path.display(), e),
            )
        })
    }
}

async fn read_limited_bytes(response: reqwest::Response, limit: usize) -> Result<Vec<u8>> {
    // Fast path: trust Content-Length when the server sends one.
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(response_too_large(len as usize, limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            PipelineError::new(
                ErrorCode::FetchError,
                format!("Failed to read feed response body: {e}"),
            )
        })?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(response_too_large(bytes.len() + chunk.len(), limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

fn response_too_large(size: usize, limit: usize) -> PipelineError {
    PipelineError::new(
        ErrorCode::FetchError,
        format!("Feed response too large: {size} bytes (limit {limit})"),
    )
}
