//! Records from a table's data rows

use scraper::{ElementRef, Selector};
use tracing::{debug, trace};
use url::Url;

use super::element::{first_link, normalized_text, sibling_index};
use super::record::Record;
use super::value::coerce;
use crate::config::ExtractConfig;
use crate::error::{Error, Result};

/// Per-run row settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOptions {
    pub string_values: bool,
    pub include_links: bool,
    pub omit_partial_rows: bool,
}

impl From<&ExtractConfig> for RowOptions {
    fn from(config: &ExtractConfig) -> Self {
        Self {
            string_values: config.string_values,
            include_links: config.include_links,
            omit_partial_rows: config.omit_partial_rows,
        }
    }
}

/// One record per matched row, in document order.
///
/// A cell maps to `columns[i]` where `i` is its element sibling index. A cell
/// past the last column is an error rather than being dropped silently.
/// With `omit_partial_rows`, rows with fewer cells than columns are skipped;
/// link fields do not count towards that.
pub fn extract_rows(
    table: &ElementRef,
    row_selector: &Selector,
    cell_selector: &Selector,
    link_selector: &Selector,
    columns: &[String],
    options: RowOptions,
    base: &Url,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (row_index, row) in table.select(row_selector).enumerate() {
        let record = extract_row(
            &row,
            row_index,
            cell_selector,
            link_selector,
            columns,
            options,
            base,
        )?;

        if !options.omit_partial_rows || record.data_fields() >= columns.len() {
            records.push(record);
        } else {
            trace!(
                "skipping partial row {} ({} of {} fields)",
                row_index,
                record.data_fields(),
                columns.len()
            );
        }
    }

    debug!("added {} rows", records.len());
    Ok(records)
}

fn extract_row(
    row: &ElementRef,
    row_index: usize,
    cell_selector: &Selector,
    link_selector: &Selector,
    columns: &[String],
    options: RowOptions,
    base: &Url,
) -> Result<Record> {
    let mut record = Record::new();

    for cell in row.select(cell_selector) {
        let index = sibling_index(&cell);
        let column = columns.get(index).ok_or(Error::ColumnOutOfRange {
            row: row_index,
            index,
            columns: columns.len(),
        })?;

        let text = normalized_text(&cell);
        record.insert_cell(column, coerce(&text, options.string_values));

        if options.include_links {
            if let Some(href) = first_link(&cell, link_selector, base) {
                record.insert_link(column, href);
            }
        }
    }

    Ok(record)
}
