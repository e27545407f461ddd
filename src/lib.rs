//! # multisearch
//!
//! A small meta search library: one query fans out to several public web
//! search engines, each results page is parsed for its result links, and
//! the per-engine lists are merged into a single deduplicated, bounded
//! list. A failing engine degrades to an empty contribution instead of
//! failing the search.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use multisearch::{engines::DuckDuckGo, HttpFetcher, Search, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = Arc::new(HttpFetcher::new());
//!     let mut search = Search::new();
//!     search.add_engine(DuckDuckGo::new(fetcher));
//!
//!     let query = SearchQuery::new("rust programming").with_limit(5);
//!     let results = search.search(query).await?;
//!
//!     for result in results.items() {
//!         println!("[{}] {}", result.source, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod aggregator;
mod engine;
mod error;
mod extract;
mod fetcher;
mod fetcher_http;
mod query;
mod result;
mod retry;
mod search;

pub mod engines;

pub use aggregator::{Aggregator, MergeOrder};
pub use engine::{Engine, EngineId};
pub use error::{Result, SearchError};
pub use extract::{extract_links, LinkRule};
pub use fetcher::{FetchConfig, FetchRequest, Fetcher, Method, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use fetcher_http::HttpFetcher;
pub use query::{SearchQuery, DEFAULT_LIMIT};
pub use result::{SearchResult, SearchResults};
pub use retry::{RetryFetcher, DEFAULT_MAX_RETRIES};
pub use search::{ExecutionMode, Search};
