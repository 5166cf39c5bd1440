//! Fetch → select → extract over every URL, in order

use scraper::Html;
use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::error::{Error, Result};
use crate::extractors::{document_base, extract_headers, extract_rows, ResultSet, RowOptions};
use crate::fetch::{Fetch, Page};
use crate::selector::CompiledSelectors;

/// Convert the tables of every page into one record list.
///
/// URLs are processed one at a time in the order given; any error aborts the
/// whole run. Selectors are compiled before the first fetch.
pub fn run<F: Fetch>(urls: &[String], config: &ExtractConfig, fetcher: &F) -> Result<ResultSet> {
    let selectors = CompiledSelectors::compile(config)?;
    let options = RowOptions::from(config);
    let mut records = ResultSet::new();

    for url in urls {
        info!("reading data from url {}", url);
        let page = fetcher.fetch(url)?;
        extract_page(&page, &selectors, options, &mut records)?;
    }

    info!("{} rows", records.len());
    Ok(records)
}

/// Append the records of every matching table in `page`
pub fn extract_page(
    page: &Page,
    selectors: &CompiledSelectors,
    options: RowOptions,
    records: &mut ResultSet,
) -> Result<()> {
    let document = Html::parse_document(&page.html);
    let base = document_base(&document, &selectors.base, &page.url);
    debug!("resolving links against {}", base);

    for (table_index, table) in document.select(&selectors.table).enumerate() {
        let columns = extract_headers(&table, &selectors.header_cell);
        let rows = extract_rows(
            &table,
            &selectors.row,
            &selectors.row_cell,
            &selectors.link,
            &columns,
            options,
            &base,
        )
        .map_err(|e| Error::Table {
            url: page.url.to_string(),
            table: table_index,
            source: Box::new(e),
        })?;
        records.extend(rows);
    }

    Ok(())
}

/// Serialize the records as a JSON array
pub fn to_json(records: &ResultSet, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
