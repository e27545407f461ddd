//! Example: Basic merged search across multiple engines.

use std::sync::Arc;

use multisearch::{
    engines::{DuckDuckGo, Yahoo},
    HttpFetcher, RetryFetcher, Search, SearchQuery,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // One retry-wrapped HTTP fetcher shared by all engines
    let fetcher = Arc::new(RetryFetcher::new(Arc::new(HttpFetcher::new())));

    // Create a new search instance
    let mut search = Search::new();

    // Add search engines
    search.add_engine(DuckDuckGo::new(fetcher.clone()));
    search.add_engine(Yahoo::new(fetcher));

    println!("Configured {} search engines", search.engine_count());

    // Create a search query
    let query = SearchQuery::new("rust programming language").with_limit(10);

    println!("Searching for: {}", query.query);
    println!();

    // Perform the search
    let results = search.search(query).await?;

    println!("Found {} results in {}ms", results.count, results.duration_ms);
    println!();

    // Display results
    for (i, result) in results.items().iter().enumerate() {
        println!("{}. [{}] {}", i + 1, result.source, result.url);
    }

    Ok(())
}
