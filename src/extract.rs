//! Selector-driven link extraction from result pages.

use scraper::{Html, Selector};
use url::Url;

use crate::{Result, SearchError};

/// Rule for picking result links out of an engine's HTML.
///
/// Rules are per-engine data: adding an engine means supplying a new rule,
/// not a new parsing code path.
#[derive(Debug, Clone)]
pub enum LinkRule {
    /// Anchors matching a CSS selector unique to the engine's result markup.
    Css(&'static str),
    /// Every anchor on the page, excluding links back into the engine's
    /// own domain (internal navigation).
    AnyAnchor {
        /// Domain substring identifying the engine's own links.
        exclude: &'static str,
    },
}

/// Extracts candidate result URLs from an HTML document.
///
/// Keeps `href` values that are present, absolute http(s) URLs, in document
/// order. Duplicates are preserved; deduplication happens at the merge step.
pub fn extract_links(html: &str, rule: &LinkRule) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    let css = match rule {
        LinkRule::Css(css) => css,
        LinkRule::AnyAnchor { .. } => "a",
    };
    let selector = Selector::parse(css)
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !is_result_url(href) {
            continue;
        }
        if let LinkRule::AnyAnchor { exclude } = rule {
            if href.contains(exclude) {
                continue;
            }
        }
        links.push(href.to_string());
    }

    Ok(links)
}

/// Returns true for syntactically valid absolute http(s) URLs.
fn is_result_url(href: &str) -> bool {
    if !href.starts_with("http") {
        return false;
    }
    matches!(Url::parse(href), Ok(url) if url.scheme() == "http" || url.scheme() == "https")
}
