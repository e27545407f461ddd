//! Search engine identity and trait.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Result, SearchQuery, SearchResult};

/// Identifies a search engine and, with it, the request shape and
/// extraction rule used against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineId {
    DuckDuckGo,
    Startpage,
    Bing,
    Yahoo,
}

impl EngineId {
    /// Display name of the engine.
    pub fn name(&self) -> &'static str {
        match self {
            EngineId::DuckDuckGo => "DuckDuckGo",
            EngineId::Startpage => "Startpage",
            EngineId::Bing => "Bing",
            EngineId::Yahoo => "Yahoo",
        }
    }

    /// Short identifier used for CLI selection (e.g., "ddg").
    pub fn shortcut(&self) -> &'static str {
        match self {
            EngineId::DuckDuckGo => "ddg",
            EngineId::Startpage => "sp",
            EngineId::Bing => "bing",
            EngineId::Yahoo => "yahoo",
        }
    }

    /// All known engines, in default registration order.
    pub fn all() -> [EngineId; 4] {
        [
            EngineId::DuckDuckGo,
            EngineId::Startpage,
            EngineId::Bing,
            EngineId::Yahoo,
        ]
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for implementing search engines.
///
/// Each engine builds its own request, fetches, and extracts up to
/// `query.limit` result links tagged with its id. Errors propagate as-is;
/// the orchestrator decides what a failed engine contributes.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Returns the engine identity.
    fn id(&self) -> EngineId;

    /// Performs a search and returns results.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>>;

    /// Returns the engine name.
    fn name(&self) -> &'static str {
        self.id().name()
    }
}
