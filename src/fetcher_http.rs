//! HTTP fetcher implementation using reqwest.

use async_trait::async_trait;
use reqwest::Client;

use crate::fetcher::{FetchConfig, FetchRequest, Fetcher, Method};
use crate::{Result, SearchError};

/// A fetcher that issues plain HTTP requests via reqwest.
///
/// One attempt per call, no retries; wrap it in a `RetryFetcher` for
/// bounded re-issue on failure.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new `HttpFetcher` with default settings.
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    /// Creates an `HttpFetcher` from an explicit configuration.
    pub fn with_config(config: FetchConfig) -> Self {
        Self {
            client: Client::builder()
                .user_agent(config.user_agent)
                .timeout(config.timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<String> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url).form(&request.form),
        };

        let response = builder
            .query(&request.params)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { SearchError::Timeout } else { e.into() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| if e.is_timeout() { SearchError::Timeout } else { e.into() })?;
        Ok(body)
    }
}
