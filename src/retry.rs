//! Retry decoration for fetchers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::fetcher::{FetchRequest, Fetcher};
use crate::Result;

/// Default number of re-issues after a failed attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// A fetcher that re-issues failed requests a bounded number of times.
///
/// Wraps any other fetcher. A request is attempted once, then up to
/// `max_retries` more times on failure, with no delay between attempts.
/// When the budget is exhausted the last error is returned unchanged.
pub struct RetryFetcher {
    inner: Arc<dyn Fetcher>,
    max_retries: u32,
}

impl RetryFetcher {
    /// Wraps a fetcher with the default retry budget.
    pub fn new(inner: Arc<dyn Fetcher>) -> Self {
        Self::with_max_retries(inner, DEFAULT_MAX_RETRIES)
    }

    /// Wraps a fetcher with an explicit retry budget.
    pub fn with_max_retries(inner: Arc<dyn Fetcher>, max_retries: u32) -> Self {
        Self { inner, max_retries }
    }
}

#[async_trait]
impl Fetcher for RetryFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.inner.fetch(request).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        "Fetch failed ({}), retrying ({}/{})",
                        e, attempt, self.max_retries
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
