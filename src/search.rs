//! Search orchestration.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::{Aggregator, Engine, MergeOrder, Result, SearchError, SearchQuery, SearchResult, SearchResults};

/// How engine extractions are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// All engines run in parallel and are joined before merging. The join
    /// preserves registration order, so output is deterministic.
    #[default]
    Concurrent,
    /// Engines run one after another in registration order.
    Sequential,
}

/// Meta search that fans a query out to all configured engines and merges
/// their outputs into one deduplicated, bounded list.
pub struct Search {
    engines: Vec<Arc<dyn Engine>>,
    aggregator: Aggregator,
    mode: ExecutionMode,
}

impl Search {
    /// Creates a new search instance with concurrent execution and
    /// first-seen ordering.
    pub fn new() -> Self {
        Self {
            engines: Vec::new(),
            aggregator: Aggregator::new(),
            mode: ExecutionMode::default(),
        }
    }

    /// Adds a search engine.
    pub fn add_engine<E: Engine + 'static>(&mut self, engine: E) {
        self.engines.push(Arc::new(engine));
    }

    /// Sets the execution mode.
    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.mode = mode;
    }

    /// Sets the merge order applied before truncation.
    pub fn set_order(&mut self, order: MergeOrder) {
        self.aggregator = Aggregator::with_order(order);
    }

    /// Returns the number of configured engines.
    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Performs a search across all configured engines.
    ///
    /// A failing engine contributes an empty list and is logged as a
    /// warning; partial source failure never fails the aggregate call.
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResults> {
        if self.engines.is_empty() {
            return Err(SearchError::NoEngines);
        }
        if query.query.trim().is_empty() {
            return Err(SearchError::InvalidQuery("Query cannot be empty".into()));
        }
        if query.limit == 0 {
            return Err(SearchError::InvalidQuery(
                "Result limit must be at least 1".into(),
            ));
        }

        let start = Instant::now();

        let per_engine = match self.mode {
            ExecutionMode::Concurrent => {
                let futures: Vec<_> = self
                    .engines
                    .iter()
                    .map(|engine| run_engine(Arc::clone(engine), &query))
                    .collect();
                join_all(futures).await
            }
            ExecutionMode::Sequential => {
                let mut collected = Vec::with_capacity(self.engines.len());
                for engine in &self.engines {
                    collected.push(run_engine(Arc::clone(engine), &query).await);
                }
                collected
            }
        };

        let merged = self.aggregator.aggregate(per_engine, query.limit);

        let mut results = SearchResults::from_results(merged);
        results.set_duration(start.elapsed().as_millis() as u64);
        Ok(results)
    }
}

/// Runs one engine, converting any failure into an empty contribution.
async fn run_engine(engine: Arc<dyn Engine>, query: &SearchQuery) -> Vec<SearchResult> {
    match engine.search(query).await {
        Ok(results) => {
            debug!("Engine {} returned {} results", engine.name(), results.len());
            results
        }
        Err(e) => {
            warn!("Engine {} failed: {}", engine.name(), e);
            Vec::new()
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineId;
    use async_trait::async_trait;

    struct MockEngine {
        id: EngineId,
        results: Vec<SearchResult>,
    }

    impl MockEngine {
        fn new(id: EngineId, urls: &[&str]) -> Self {
            Self {
                id,
                results: urls.iter().map(|u| SearchResult::new(*u, id)).collect(),
            }
        }
    }

    #[async_trait]
    impl Engine for MockEngine {
        fn id(&self) -> EngineId {
            self.id
        }

        async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
            Ok(self.results.iter().take(query.limit).cloned().collect())
        }
    }

    struct FailingEngine {
        id: EngineId,
    }

    #[async_trait]
    impl Engine for FailingEngine {
        fn id(&self) -> EngineId {
            self.id
        }

        async fn search(&self, _query: &SearchQuery) -> Result<Vec<SearchResult>> {
            Err(SearchError::Other("Engine failed".to_string()))
        }
    }

    #[tokio::test]
    async fn test_search_new() {
        let search = Search::new();
        assert_eq!(search.engine_count(), 0);
    }

    #[tokio::test]
    async fn test_search_add_engine() {
        let mut search = Search::new();
        search.add_engine(MockEngine::new(EngineId::Bing, &[]));
        assert_eq!(search.engine_count(), 1);
    }

    #[tokio::test]
    async fn test_search_no_engines() {
        let search = Search::new();
        let result = search.search(SearchQuery::new("test")).await;
        assert!(matches!(result, Err(SearchError::NoEngines)));
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let mut search = Search::new();
        search.add_engine(MockEngine::new(EngineId::Bing, &[]));
        let result = search.search(SearchQuery::new("   ")).await;
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_search_zero_limit() {
        let mut search = Search::new();
        search.add_engine(MockEngine::new(EngineId::Bing, &[]));
        let result = search.search(SearchQuery::new("test").with_limit(0)).await;
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_search_merges_and_dedups() {
        let mut search = Search::new();
        search.add_engine(MockEngine::new(
            EngineId::DuckDuckGo,
            &["https://a.example", "https://b.example"],
        ));
        search.add_engine(MockEngine::new(
            EngineId::Bing,
            &["https://b.example", "https://c.example"],
        ));

        let results = search.search(SearchQuery::new("test")).await.unwrap();
        let urls: Vec<&str> = results.items().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example", "https://b.example", "https://c.example"]);
        assert_eq!(results.items()[1].source, EngineId::DuckDuckGo);
    }

    #[tokio::test]
    async fn test_search_bounded_by_limit() {
        let mut search = Search::new();
        search.add_engine(MockEngine::new(
            EngineId::DuckDuckGo,
            &["https://a.example", "https://b.example", "https://c.example"],
        ));
        search.add_engine(MockEngine::new(
            EngineId::Yahoo,
            &["https://d.example", "https://e.example"],
        ));

        let results = search
            .search(SearchQuery::new("test").with_limit(2))
            .await
            .unwrap();
        assert_eq!(results.count, 2);
        assert_eq!(results.items()[0].url, "https://a.example");
        assert_eq!(results.items()[1].url, "https://b.example");
    }

    #[tokio::test]
    async fn test_search_handles_engine_failure() {
        let mut search = Search::new();
        search.add_engine(MockEngine::new(EngineId::DuckDuckGo, &["https://a.example"]));
        search.add_engine(FailingEngine { id: EngineId::Yahoo });

        let results = search.search(SearchQuery::new("test")).await.unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.items()[0].url, "https://a.example");
    }

    #[tokio::test]
    async fn test_search_all_engines_fail() {
        let mut search = Search::new();
        search.add_engine(FailingEngine { id: EngineId::Bing });
        search.add_engine(FailingEngine { id: EngineId::Yahoo });

        let results = search.search(SearchQuery::new("test")).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_sequential_mode_same_output() {
        let build = || {
            let mut search = Search::new();
            search.add_engine(MockEngine::new(
                EngineId::DuckDuckGo,
                &["https://a.example", "https://b.example"],
            ));
            search.add_engine(MockEngine::new(
                EngineId::Bing,
                &["https://b.example", "https://c.example"],
            ));
            search
        };

        let concurrent = build().search(SearchQuery::new("test")).await.unwrap();

        let mut sequential_search = build();
        sequential_search.set_mode(ExecutionMode::Sequential);
        let sequential = sequential_search.search(SearchQuery::new("test")).await.unwrap();

        assert_eq!(concurrent.items(), sequential.items());
    }

    #[tokio::test]
    async fn test_search_source_order() {
        let mut search = Search::new();
        search.set_order(MergeOrder::Source);
        search.add_engine(MockEngine::new(EngineId::Yahoo, &["https://y.example"]));
        search.add_engine(MockEngine::new(EngineId::Bing, &["https://b.example"]));

        let results = search.search(SearchQuery::new("test")).await.unwrap();
        assert_eq!(results.items()[0].source, EngineId::Bing);
        assert_eq!(results.items()[1].source, EngineId::Yahoo);
    }

    #[tokio::test]
    async fn test_search_records_duration() {
        let mut search = Search::new();
        search.add_engine(MockEngine::new(EngineId::Bing, &[]));

        let results = search.search(SearchQuery::new("test")).await.unwrap();
        let _ = results.duration_ms;
    }

    #[tokio::test]
    async fn test_scenario_partial_overlap_with_failing_engine() {
        // DuckDuckGo returns [a, b, c], Bing returns [b, d], Yahoo fails;
        // limit 3 keeps [a, b, c].
        let mut search = Search::new();
        search.add_engine(MockEngine::new(
            EngineId::DuckDuckGo,
            &["https://a.example", "https://b.example", "https://c.example"],
        ));
        search.add_engine(MockEngine::new(
            EngineId::Bing,
            &["https://b.example", "https://d.example"],
        ));
        search.add_engine(FailingEngine { id: EngineId::Yahoo });

        let results = search
            .search(SearchQuery::new("cats").with_limit(3))
            .await
            .unwrap();
        let urls: Vec<&str> = results.items().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example", "https://b.example", "https://c.example"]);
    }
}
