//! HTTP fetch abstraction: request description and fetcher trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::Result;

/// Default User-Agent sent with every request. Engines reject or degrade
/// requests without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a fetcher, applied once at construction time.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP method of a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An immutable description of a single outbound request.
///
/// Engines build one of these per search; the fetcher turns it into an
/// actual HTTP call. Query parameters and form fields are kept as data so
/// the fetcher controls all encoding.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// HTTP method.
    pub method: Method,
    /// Target URL without query string.
    pub url: String,
    /// Query-string parameters.
    pub params: Vec<(String, String)>,
    /// Form-encoded body fields (POST only).
    pub form: Vec<(String, String)>,
}

impl FetchRequest {
    /// Creates a GET request for the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            params: Vec::new(),
            form: Vec::new(),
        }
    }

    /// Creates a POST request for the given URL.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            params: Vec::new(),
            form: Vec::new(),
        }
    }

    /// Adds a query-string parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a form-encoded body field.
    pub fn with_form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }
}

/// Trait for fetching the raw body of a request.
///
/// Implementations perform exactly one attempt per call; retry behavior is
/// layered on top via a wrapping implementation. All configuration
/// (user-agent, timeout) is set at construction time.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the response body for the given request.
    async fn fetch(&self, request: &FetchRequest) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_fetch_request_get() {
        let request = FetchRequest::get("https://example.com/search")
            .with_param("q", "cats")
            .with_param("count", "5");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://example.com/search");
        assert_eq!(
            request.params,
            vec![
                ("q".to_string(), "cats".to_string()),
                ("count".to_string(), "5".to_string())
            ]
        );
        assert!(request.form.is_empty());
    }

    #[test]
    fn test_fetch_request_post() {
        let request = FetchRequest::post("https://example.com/search").with_form("q", "cats");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.form, vec![("q".to_string(), "cats".to_string())]);
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_fetch_request_clone() {
        let request = FetchRequest::get("https://example.com").with_param("q", "rust");
        let cloned = request.clone();
        assert_eq!(cloned.url, request.url);
        assert_eq!(cloned.params, request.params);
    }

    #[test]
    fn test_fetch_request_debug() {
        let request = FetchRequest::get("https://example.com");
        let debug = format!("{:?}", request);
        assert!(debug.contains("example.com"));
        assert!(debug.contains("Get"));
    }
}
