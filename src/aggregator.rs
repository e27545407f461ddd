//! Result merging, deduplication, and bounding.

use std::collections::HashSet;

use crate::SearchResult;

/// Ordering applied to the merged list before truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeOrder {
    /// Keep first-sighting insertion order (concatenation order).
    #[default]
    FirstSeen,
    /// Sort lexicographically by source name. A presentation choice, not a
    /// relevance ranking; the sort is stable so first-seen order survives
    /// within one source.
    Source,
}

/// Merges per-engine result lists into one deduplicated, bounded list.
#[derive(Debug, Default)]
pub struct Aggregator {
    order: MergeOrder,
}

impl Aggregator {
    /// Creates a new aggregator with first-seen ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator with an explicit merge order.
    pub fn with_order(order: MergeOrder) -> Self {
        Self { order }
    }

    /// Returns the configured merge order.
    pub fn order(&self) -> MergeOrder {
        self.order
    }

    /// Merges per-engine outputs into the final list.
    ///
    /// Lists are concatenated in the order given (engine invocation order),
    /// deduplicated by URL with the first occurrence winning, optionally
    /// re-ordered, and truncated to `limit` after dedup.
    pub fn aggregate(
        &self,
        engine_results: Vec<Vec<SearchResult>>,
        limit: usize,
    ) -> Vec<SearchResult> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut merged: Vec<SearchResult> = Vec::new();

        for results in engine_results {
            for result in results {
                if seen.insert(result.url.clone()) {
                    merged.push(result);
                }
            }
        }

        if self.order == MergeOrder::Source {
            merged.sort_by(|a, b| a.source.name().cmp(b.source.name()));
        }

        merged.truncate(limit);
        merged
    }
}
