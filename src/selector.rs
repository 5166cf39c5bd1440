//! Selector compilation with support for jsoup-style index pseudo-classes
//!
//! `scraper` speaks standard CSS, which has no `:eq(n)`, `:lt(n)` or `:gt(n)`.
//! Those take a zero-based element sibling index, so they map directly onto
//! `:nth-child` formulas before parsing.

use scraper::Selector;

use crate::config::ExtractConfig;
use crate::error::{Error, Result};

/// Rewrite index pseudo-classes into standard `:nth-child` selectors.
///
/// Quoted attribute values are copied verbatim.
pub fn translate(selector: &str) -> String {
    let mut out = String::with_capacity(selector.len() + 16);
    let mut rest = selector;

    while let Some(c) = rest.chars().next() {
        if c == '"' || c == '\'' {
            let end = rest[1..].find(c).map(|i| i + 2).unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }

        if c == ':' {
            if let Some((replacement, consumed)) = index_pseudo(rest) {
                out.push_str(&replacement);
                rest = &rest[consumed..];
                continue;
            }
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Parse `:eq(n)`, `:lt(n)` or `:gt(n)` at the start of `input`.
/// Returns the `:nth-child` replacement and the number of bytes consumed.
fn index_pseudo(input: &str) -> Option<(String, usize)> {
    let name = input.get(1..3)?;
    if !matches!(name, "eq" | "lt" | "gt") || !input[3..].starts_with('(') {
        return None;
    }

    let close = input.find(')')?;
    let n: usize = input[4..close].trim().parse().ok()?;

    let replacement = match name {
        "eq" => format!(":nth-child({})", n + 1),
        // index < n  <=>  position <= n
        "lt" if n == 0 => ":not(*)".to_string(),
        "lt" => format!(":nth-child(-n+{})", n),
        // index > n  <=>  position >= n + 2
        _ => format!(":nth-child(n+{})", n + 2),
    };

    Some((replacement, close + 1))
}

/// Translate and parse a single selector
pub fn compile(selector: &str) -> Result<Selector> {
    let translated = translate(selector);
    Selector::parse(&translated).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// The configured selectors, parsed once per run
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub table: Selector,
    pub header_cell: Selector,
    pub row: Selector,
    pub row_cell: Selector,
    /// First link inside a cell
    pub link: Selector,
    /// `<base href>` of a document
    pub base: Selector,
}

impl CompiledSelectors {
    pub fn compile(config: &ExtractConfig) -> Result<Self> {
        Ok(Self {
            table: compile(&config.table_selector)?,
            header_cell: compile(&config.header_cell_selector)?,
            row: compile(&config.row_selector)?,
            row_cell: compile(&config.row_cell_selector)?,
            link: compile("a[href]")?,
            base: compile("base[href]")?,
        })
    }
}
