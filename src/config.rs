//! Run configuration, resolved once before any page is fetched

use std::time::Duration;

pub const DEFAULT_TABLE_SELECTOR: &str = "table:eq(0)";
pub const DEFAULT_HEADER_CELL_SELECTOR: &str = "thead tr:eq(0) th";
pub const DEFAULT_ROW_SELECTOR: &str = "tbody tr";
pub const DEFAULT_ROW_CELL_SELECTOR: &str = "td";

/// Same as jsoup's connection default
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which nodes to read and how to type their values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Locates table root nodes in each document
    pub table_selector: String,
    /// Header cells, relative to a table
    pub header_cell_selector: String,
    /// Data rows, relative to a table
    pub row_selector: String,
    /// Cells, relative to a row
    pub row_cell_selector: String,
    /// Keep every value as a string
    pub string_values: bool,
    /// Add `<column>_link` fields for the first link in a cell
    pub include_links: bool,
    /// Drop rows with fewer data fields than columns
    pub omit_partial_rows: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            header_cell_selector: DEFAULT_HEADER_CELL_SELECTOR.to_string(),
            row_selector: DEFAULT_ROW_SELECTOR.to_string(),
            row_cell_selector: DEFAULT_ROW_CELL_SELECTOR.to_string(),
            string_values: false,
            include_links: false,
            omit_partial_rows: false,
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("table-to-json/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Indent the JSON array
    pub pretty: bool,
}
