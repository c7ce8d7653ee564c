//! HTTP client for downloading source CSV exports.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, covering connect, headers and body.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("worldworth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while retrieving a source.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

impl FetchError {
    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Status { status } => Some(*status),
        }
    }
}

/// HTTP client that retrieves source exports in a single attempt.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads a source export and returns its body as text.
    ///
    /// Only a 2xx status counts as success. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for any non-2xx response and
    /// [`FetchError::Http`] if the request or body read fails.
    pub async fn retrieve(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "source responded");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("worldworth/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = FetchClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_status_accessor() {
        let err = FetchError::Status { status: 404 };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Server returned status 404");
    }
}
