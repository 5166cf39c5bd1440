//! Element helpers shared by the header and row extractors
//!
//! Text, sibling positions and link targets read off `scraper` elements.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Rendered text: descendant text joined, whitespace collapsed, trimmed
pub fn normalized_text(element: &ElementRef) -> String {
    let raw = element.text().collect::<String>();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Zero-based position among the parent's element children
pub fn sibling_index(element: &ElementRef) -> usize {
    element
        .prev_siblings()
        .filter(|node| node.value().is_element())
        .count()
}

/// Base URL links resolve against: `<base href>` if present, else the page URL
pub fn document_base(document: &Html, base_selector: &Selector, page_url: &Url) -> Url {
    document
        .select(base_selector)
        .next()
        .and_then(|base| base.value().attr("href"))
        .and_then(|href| page_url.join(href.trim()).ok())
        .unwrap_or_else(|| page_url.clone())
}

/// Absolute href of the first link inside `cell`.
///
/// A href that does not resolve gives an empty string, like jsoup's `abs:href`.
pub fn first_link(cell: &ElementRef, link_selector: &Selector, base: &Url) -> Option<String> {
    let href = cell.select(link_selector).next()?.value().attr("href")?;
    Some(
        base.join(href.trim())
            .map(|u| u.to_string())
            .unwrap_or_default(),
    )
}
