//! Search query representation.

use serde::{Deserialize, Serialize};

/// Default number of results when none is requested.
pub const DEFAULT_LIMIT: usize = 10;

/// A search query with all parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
    /// Maximum results requested from each engine and kept after the merge.
    pub limit: usize,
}

impl SearchQuery {
    /// Creates a new search query with the given terms and default limit.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
