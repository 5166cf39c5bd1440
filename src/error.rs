//! Error types shared by the extractors, the fetcher and the driver

use thiserror::Error;

/// Everything that can abort a conversion run
#[derive(Debug, Error)]
pub enum Error {
    /// A configured selector could not be parsed
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// The URL could not be parsed or uses an unsupported scheme
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: ureq::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Http { url: String, status: u16 },

    /// A row holds a cell at a position no header names
    #[error("row {row}: cell at position {index} has no column name ({columns} columns known)")]
    ColumnOutOfRange {
        row: usize,
        index: usize,
        columns: usize,
    },

    /// Locates an extraction failure within a page
    #[error("table {table} of {url}")]
    Table {
        url: String,
        table: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to serialize records")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
