//! Yahoo search engine implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::extract::{extract_links, LinkRule};
use crate::fetcher::{FetchRequest, Fetcher};
use crate::{Engine, EngineId, Result, SearchQuery, SearchResult};

/// Yahoo's result markup carries no stable selector, so every anchor is a
/// candidate; links into yahoo.com itself are internal navigation.
const RESULT_RULE: LinkRule = LinkRule::AnyAnchor { exclude: "yahoo.com" };

/// Yahoo search engine.
pub struct Yahoo {
    fetcher: Arc<dyn Fetcher>,
}

impl Yahoo {
    /// Creates a new Yahoo engine over the given fetcher.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    fn request(query: &SearchQuery) -> FetchRequest {
        FetchRequest::get("https://search.yahoo.com/search").with_param("p", &query.query)
    }
}

#[async_trait]
impl Engine for Yahoo {
    fn id(&self) -> EngineId {
        EngineId::Yahoo
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
