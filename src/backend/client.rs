//! HTTP client for the price-comparison backend.

use super::error::SearchError;
use super::models::{parse_search_body, SearchResult};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

/// Trait for backend searches - enables mocking for tests.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Runs one search and returns the normalized result.
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError>;
}

/// Backend HTTP client. One request per search, no retries.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a new backend client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, config.backend_url.clone())
    }

    /// Creates a new backend client against a custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self> {
        let mut builder = Client::builder().gzip(true).brotli(true);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Returns the search endpoint URL for a query.
    fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }
}

#[async_trait]
impl SearchBackend for BackendClient {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let url = self.search_url(query);

        info!("Searching backend: {}", query);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(SearchError::Connectivity)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(SearchError::Backend { status: status.as_u16() });
        }

        let body = response.text().await.map_err(SearchError::Connectivity)?;
        let result = parse_search_body(&body)?;

        debug!(
            "Backend returned {} products from {} sources",
            result.count(),
            result.scraper_statuses.len()
        );

        Ok(result)
    }
}
