//! Column names from a table's header cells

use scraper::{ElementRef, Selector};
use tracing::debug;

use super::element::normalized_text;

/// Lower-cased header texts in document order.
///
/// Built fresh for every table; a selector matching nothing gives no columns.
pub fn extract_headers(table: &ElementRef, header_selector: &Selector) -> Vec<String> {
    let columns: Vec<String> = table
        .select(header_selector)
        .map(|cell| normalized_text(&cell).to_lowercase())
        .collect();

    debug!("found {} columns", columns.len());
    columns
}
