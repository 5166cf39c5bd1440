//! Table extraction modules
//!
//! Headers and rows are read from a table node separately; values are typed
//! by the coercer as each cell is read.

mod element;
mod header_extractor;
mod record;
mod row_extractor;
mod value;

pub use element::*;
pub use header_extractor::*;
pub use record::*;
pub use row_extractor::*;
pub use value::*;

/// Records accumulated across every table of every page, in processing order
pub type ResultSet = Vec<Record>;
