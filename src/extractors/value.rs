//! Typed cell values
//!
//! Cell text becomes a boolean, an integer, a float or stays a string.
//! Coercion never fails: anything that is not recognisably typed is kept as
//! the original text.

use serde::Serialize;

/// A coerced cell value, serialized as the matching native JSON type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

/// Coerce raw cell text, honouring string-only mode
pub fn coerce(text: &str, string_values: bool) -> CellValue {
    if string_values {
        return CellValue::String(text.to_string());
    }

    if text.eq_ignore_ascii_case("true") {
        CellValue::Boolean(true)
    } else if text.eq_ignore_ascii_case("false") {
        CellValue::Boolean(false)
    } else {
        number_or_string(text)
    }
}

/// Integer first, then float, else the text unchanged.
/// Non-finite floats have no JSON form and stay strings.
pub fn number_or_string(text: &str) -> CellValue {
    if let Ok(i) = text.parse::<i64>() {
        return CellValue::Integer(i);
    }

    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => CellValue::Float(f),
        _ => CellValue::String(text.to_string()),
    }
}
