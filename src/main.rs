//! multisearch CLI - merged web search from the command line.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use multisearch::{
    engines::{Bing, DuckDuckGo, Startpage, Yahoo},
    EngineId, ExecutionMode, FetchConfig, Fetcher, HttpFetcher, MergeOrder, RetryFetcher, Search,
    SearchQuery, SearchResults, DEFAULT_USER_AGENT,
};

/// Query several web search engines and print a merged, deduplicated list
/// of result links.
#[derive(Parser)]
#[command(name = "multisearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    #[arg(required_unless_present = "interactive")]
    query: Option<String>,

    /// Number of results to request per engine and keep after merging
    #[arg(value_parser = parse_count, required_unless_present = "interactive")]
    count: Option<usize>,

    /// Search engines to use (comma-separated)
    /// Available: ddg, sp, bing, yahoo
    #[arg(short, long, value_delimiter = ',')]
    engines: Option<Vec<String>>,

    /// Run engines one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Retry attempts after a failed fetch (0 disables retries)
    #[arg(long, default_value = "2")]
    retries: u32,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout: u64,

    /// Ordering of the merged list
    #[arg(short, long, default_value = "first-seen")]
    order: OrderChoice,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Prompt for query and result count instead of reading arguments
    #[arg(short, long)]
    interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderChoice {
    /// Keep first-seen order across engines
    FirstSeen,
    /// Sort by source engine name
    Source,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Tab-separated single-line output
    Compact,
}

fn parse_count(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err("result count must be a positive integer".to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Engine failures surface as warnings on stderr; -v raises to debug.
    let default_filter = if cli.verbose {
        "multisearch=debug"
    } else {
        "multisearch=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let (query_text, count) = if cli.interactive {
        read_interactive()?
    } else {
        (
            cli.query.clone().context("missing search query")?,
            cli.count.context("missing result count")?,
        )
    };

    let search = build_search(&cli)?;

    let query = SearchQuery::new(&query_text).with_limit(count);
    let results = search.search(query).await?;

    print_results(&query_text, &results, cli.format)?;
    Ok(())
}

/// Builds the fetcher stack and engine set from CLI flags.
fn build_search(cli: &Cli) -> Result<Search> {
    let config = FetchConfig {
        user_agent: DEFAULT_USER_AGENT.to_string(),
        timeout: Duration::from_secs(cli.timeout),
    };
    let http: Arc<dyn Fetcher> = Arc::new(HttpFetcher::with_config(config));
    let fetcher: Arc<dyn Fetcher> = if cli.retries > 0 {
        Arc::new(RetryFetcher::with_max_retries(http, cli.retries))
    } else {
        http
    };

    let mut search = Search::new();
    if cli.sequential {
        search.set_mode(ExecutionMode::Sequential);
    }
    search.set_order(match cli.order {
        OrderChoice::FirstSeen => MergeOrder::FirstSeen,
        OrderChoice::Source => MergeOrder::Source,
    });

    let shortcuts: Vec<String> = cli.engines.clone().unwrap_or_else(|| {
        EngineId::all()
            .iter()
            .map(|id| id.shortcut().to_string())
            .collect()
    });

    for shortcut in &shortcuts {
        match shortcut.as_str() {
            "ddg" | "duckduckgo" => search.add_engine(DuckDuckGo::new(Arc::clone(&fetcher))),
            "sp" | "startpage" => search.add_engine(Startpage::new(Arc::clone(&fetcher))),
            "bing" => search.add_engine(Bing::new(Arc::clone(&fetcher))),
            "yahoo" => search.add_engine(Yahoo::new(Arc::clone(&fetcher))),
            _ => {
                eprintln!("Warning: Unknown engine '{}', skipping", shortcut);
            }
        }
    }

    if search.engine_count() == 0 {
        anyhow::bail!("No valid engines specified");
    }

    Ok(search)
}

/// Prompts for the query and result count on stdin, applying the same
/// validation as the argument parser.
fn read_interactive() -> Result<(String, usize)> {
    let stdin = io::stdin();
    let mut line = String::new();

    print!("Search query: ");
    io::stdout().flush()?;
    stdin.lock().read_line(&mut line)?;
    let query = line.trim().to_string();
    if query.is_empty() {
        anyhow::bail!("Query cannot be empty");
    }

    line.clear();
    print!("Number of results: ");
    io::stdout().flush()?;
    stdin.lock().read_line(&mut line)?;
    let count = parse_count(line.trim()).map_err(|e| anyhow::anyhow!(e))?;

    Ok((query, count))
}

fn print_results(query: &str, results: &SearchResults, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No results found.");
                return Ok(());
            }
            println!(
                "\nCombined results for \"{}\" ({} results in {}ms):\n",
                query, results.count, results.duration_ms
            );
            for (i, result) in results.items().iter().enumerate() {
                println!("{}. [{}] {}", i + 1, result.source, result.url);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results.items())?);
        }
        OutputFormat::Compact => {
            for result in results.items() {
                println!("{}\t{}", result.source, result.url);
            }
        }
    }
    Ok(())
}
