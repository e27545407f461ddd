//! DuckDuckGo search engine implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::extract::{extract_links, LinkRule};
use crate::fetcher::{FetchRequest, Fetcher};
use crate::{Engine, EngineId, Result, SearchQuery, SearchResult};

/// Result-link selector on the html.duckduckgo.com markup.
const RESULT_RULE: LinkRule = LinkRule::Css("a.result__a");

/// DuckDuckGo search engine, using the static HTML endpoint.
pub struct DuckDuckGo {
    fetcher: Arc<dyn Fetcher>,
}

impl DuckDuckGo {
    /// Creates a new DuckDuckGo engine over the given fetcher.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// The endpoint takes the query as a form-encoded POST body.
    fn request(query: &SearchQuery) -> FetchRequest {
        FetchRequest::post("https://html.duckduckgo.com/html/").with_form("q", &query.query)
    }
}

#[async_trait]
impl Engine for DuckDuckGo {
    fn id(&self) -> EngineId {
        EngineId::DuckDuckGo
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let html = self.fetcher.fetch(&Self::request(query)).await?;
        let links = extract_links(&html, &RESULT_RULE)?;
        Ok(links
            .into_iter()
            .take(query.limit)
            .map(|url| SearchResult::new(url, self.id()))
            .collect())
    }
}
