//! Retrieval of checksums and reference copies.
//!
//! Supported schemes are `file`, `http` and `https`. HTTP requests are bounded
//! by the configured timeout and are not retried.

use crate::core::{ProjectUtilError, Result};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Fetches URL content for the integrity workflow.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Fetcher {
    /// Create a fetcher whose HTTP requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// [`ProjectUtilError::ConfigError`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProjectUtilError::ConfigError {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self::with_client(client, timeout))
    }

    /// Use an existing client. `timeout` is only used to report timeouts; the
    /// client's own settings decide when a request gives up.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
        }
    }

    /// Fetch `url` as raw bytes.
    ///
    /// # Errors
    ///
    /// - [`ProjectUtilError::UnsupportedUrl`] for malformed URLs or other schemes
    /// - [`ProjectUtilError::FetchTimeout`] when an HTTP request times out
    /// - [`ProjectUtilError::NetworkError`] for unreadable files, connection
    ///   failures and non-success HTTP statuses
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let parsed = Url::parse(url).map_err(|e| ProjectUtilError::UnsupportedUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!("Fetching {}", url);
        match parsed.scheme() {
            "file" => self.fetch_file(url, &parsed).await,
            "http" | "https" => self.fetch_http(url, parsed).await,
            other => Err(ProjectUtilError::UnsupportedUrl {
                url: url.to_string(),
                reason: format!("scheme '{other}' is not supported"),
            }),
        }
    }

    /// Fetch `url` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`Fetcher::fetch_bytes`], plus [`ProjectUtilError::NetworkError`]
    /// when the content is not valid UTF-8.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let bytes = self.fetch_bytes(url).await?;
        String::from_utf8(bytes).map_err(|_| ProjectUtilError::NetworkError {
            url: url.to_string(),
            reason: "content is not valid UTF-8".to_string(),
        })
    }

    async fn fetch_file(&self, url: &str, parsed: &Url) -> Result<Vec<u8>> {
        let path = parsed.to_file_path().map_err(|()| ProjectUtilError::UnsupportedUrl {
            url: url.to_string(),
            reason: "not a local file path".to_string(),
        })?;

        tokio::fs::read(&path).await.map_err(|e| ProjectUtilError::NetworkError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn fetch_http(&self, url: &str, parsed: Url) -> Result<Vec<u8>> {
        let failed = |e: reqwest::Error| {
            if e.is_timeout() {
                ProjectUtilError::FetchTimeout {
                    url: url.to_string(),
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                ProjectUtilError::NetworkError {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        };

        let response = self.client.get(parsed).send().await.map_err(failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProjectUtilError::NetworkError {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let body = response.bytes().await.map_err(failed)?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
