//! Startpage search engine implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::extract::{extract_links, LinkRule};
use crate::fetcher::{FetchRequest, Fetcher};
use crate::{Engine, EngineId, Result, SearchQuery, SearchResult};

/// Result-link selector on the Startpage results markup.
const RESULT_RULE: LinkRule = LinkRule::Css("a.w-gl__result-url");

/// Startpage search engine.
pub struct Startpage {
    fetcher: Arc<dyn Fetcher>,
}

impl Startpage {
    /// Creates a new Startpage engine over the given fetcher.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Startpage accepts the desired count as a query parameter.
    fn request(query: &SearchQuery) -> FetchRequest {
        FetchRequest::get("https://www.startpage.com/do/search")
            .with_param("q", &query.query)
            .with_param("count", query.limit.to_string())
    }
}

#[async_trait]
impl Engine for Startpage {
    fn id(&self) -> EngineId {
        EngineId::Startpage
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
