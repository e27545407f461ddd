//! Bing search engine implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::extract::{extract_links, LinkRule};
use crate::fetcher::{FetchRequest, Fetcher};
use crate::{Engine, EngineId, Result, SearchQuery, SearchResult};

/// Organic results are `li.b_algo` items with the link in the heading.
const RESULT_RULE: LinkRule = LinkRule::Css("li.b_algo h2 a");

/// Bing search engine.
pub struct Bing {
    fetcher: Arc<dyn Fetcher>,
}

impl Bing {
    /// Creates a new Bing engine over the given fetcher.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    fn request(query: &SearchQuery) -> FetchRequest {
        FetchRequest::get("https://www.bing.com/search").with_param("q", &query.query)
    }
}

#[async_trait]
impl Engine for Bing {
    fn id(&self) -> EngineId {
        EngineId::Bing
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
