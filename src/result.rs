//! Search result types.

use serde::{Deserialize, Serialize};

use crate::EngineId;

/// A single result link observed on an engine's results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result URL.
    pub url: String,
    /// Engine that produced this result.
    pub source: EngineId,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(url: impl Into<String>, source: EngineId) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

/// Container for aggregated search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    /// Merged, deduplicated results.
    results: Vec<SearchResult>,
    /// Number of results.
    pub count: usize,
    /// Search duration in milliseconds.
    pub duration_ms: u64,
}

impl SearchResults {
    /// Creates a new empty result container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container from merged results.
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        let count = results.len();
        Self {
            results,
            count,
            duration_ms: 0,
        }
    }

    /// Returns the results.
    pub fn items(&self) -> &[SearchResult] {
        &self.results
    }

    /// Returns true if no engine contributed any result.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sets the search duration.
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }
}
