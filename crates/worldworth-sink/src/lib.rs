//! Price record delivery for the worldworth real-estate price ingester.
//!
//! [`SinkClient`] posts one [`PriceRecord`] per request to the ingestion
//! endpoint and reports the outcome of that single attempt.

#![doc(issue_tracker_base_url = "https://github.com/worldworth/worldworth/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use worldworth_types::PriceRecord;

/// Default ingestion endpoint.
pub const DEFAULT_SINK_URL: &str = "https://worldworth.onrender.com/add-price";

/// Configuration for the sink client.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("worldworth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while delivering a record.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The request could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The sink answered with a non-2xx status.
    #[error("Sink rejected record with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the sink.
        body: String,
    },
}

impl DeliveryError {
    /// Returns the HTTP status code, if the sink answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Rejected { status, .. } => Some(*status),
        }
    }
}

/// HTTP client that posts price records to the ingestion endpoint.
#[derive(Debug, Clone)]
pub struct SinkClient {
    client: Client,
    url: String,
}

impl SinkClient {
    /// Creates a sink client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(url: impl Into<String>, config: SinkConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Creates a sink client for the given endpoint with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::new(url, SinkConfig::default())
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts a single record as JSON.
    ///
    /// Only a 2xx status counts as delivered. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Rejected`] with the sink's response text for
    /// any non-2xx response, and [`DeliveryError::Http`] if the request fails.
    pub async fn deliver(&self, record: &PriceRecord) -> Result<(), DeliveryError> {
        let response = self.client.post(&self.url).json(record).send().await?;
        let status = response.status();
        debug!(
            property_id = record.property_id(),
            status = status.as_u16(),
            "sink responded"
        );

        if status.is_success() {
            return Ok(());
        }

        // Body is best-effort diagnostic text.
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
