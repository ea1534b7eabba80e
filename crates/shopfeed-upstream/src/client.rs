//! HTTP client for the upstream product feed.

use std::time::Duration;

use reqwest::Client;

use crate::error::UpstreamError;
use crate::types::UpstreamProduct;

/// HTTP client for the upstream product feed endpoint.
///
/// The feed is a fixed JSON array of product records at a single URL; there
/// is no pagination and no caching, and failures are not retried — the
/// adapter fetches fresh data once per request and reports errors as typed
/// [`UpstreamError`] values for the HTTP layer to map.
pub struct UpstreamClient {
    client: Client,
    url: String,
}

impl UpstreamClient {
    /// Creates an `UpstreamClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        url: impl Into<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The configured feed URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the full product feed.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::NotFound`] — HTTP 404.
    /// - [`UpstreamError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`UpstreamError::Http`] — network or TLS failure.
    /// - [`UpstreamError::Deserialize`] — response body is not a JSON array
    ///   of upstream products.
    pub async fn fetch_products(&self) -> Result<Vec<UpstreamProduct>, UpstreamError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound {
                url: self.url.clone(),
            });
        }

        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let products = serde_json::from_str::<Vec<UpstreamProduct>>(&body).map_err(|e| {
            UpstreamError::Deserialize {
                context: format!("product feed from {}", self.url),
                source: e,
            }
        })?;

        tracing::debug!(count = products.len(), url = %self.url, "fetched upstream products");
        Ok(products)
    }
}
