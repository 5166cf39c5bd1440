//! One output object per table row

use indexmap::IndexMap;
use serde::Serialize;

use super::value::CellValue;

/// Ordered column → value mapping.
///
/// Re-inserting an existing key replaces its value in place, so a record built
/// from a table with duplicate column names keeps the first position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, CellValue>,
    #[serde(skip)]
    data_fields: usize,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value read from a cell
    pub fn insert_cell(&mut self, column: &str, value: CellValue) {
        self.fields.insert(column.to_string(), value);
        self.data_fields += 1;
    }

    /// Insert the `<column>_link` field for a cell's first link
    pub fn insert_link(&mut self, column: &str, href: String) {
        self.fields
            .insert(format!("{column}_link"), CellValue::String(href));
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Cells placed in this record; link fields are not counted
    pub fn data_fields(&self) -> usize {
        self.data_fields
    }
}
