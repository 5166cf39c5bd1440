//! HTML table to JSON converter
//!
//! Fetches pages, selects table nodes by CSS selector and turns each data row
//! into a record keyed by the lower-cased header text:
//! - Header and row extraction with sibling-index column alignment
//! - Boolean / integer / float / string value typing
//! - Optional `<column>_link` fields and partial-row filtering
//! - jsoup-style `:eq()`, `:lt()`, `:gt()` selectors

pub mod config;
pub mod driver;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod selector;

pub use config::*;
pub use driver::*;
pub use error::{Error, Result};
pub use extractors::*;
pub use fetch::*;
