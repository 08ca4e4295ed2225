//! Defensive lookups over untyped upstream documents.
//!
//! Upstream JSON is treated as a partial mapping. Each lookup yields a
//! [`Field`] that is either the value found or a named placeholder, so a
//! missing key turns into text instead of a failure.

use serde_json::Value;
use std::fmt;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

/// A value read from a document, or the placeholder used in its absence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Present(&'a Value),
    Default(&'static str),
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Strings render without the JSON quotes.
            Field::Present(Value::String(s)) => f.write_str(s),
            Field::Present(other) => write!(f, "{other}"),
            Field::Default(text) => f.write_str(text),
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// `doc[key]`, or `default` when missing or null.
pub fn field<'a>(doc: &'a Value, key: &str, default: &'static str) -> Field<'a> {
    match present(doc.get(key)) {
        Some(v) => Field::Present(v),
        None => Field::Default(default),
    }
}

/// `daily[key][index]` from Open-Meteo's parallel arrays, or `default`.
pub fn indexed<'a>(
    daily: &'a Value,
    key: &str,
    index: usize,
    default: &'static str,
) -> Field<'a> {
    match present(daily.get(key).and_then(|arr| arr.get(index))) {
        Some(v) => Field::Present(v),
        None => Field::Default(default),
    }
}

/// Numeric `doc[key]`, or `default` when missing or not a number.
pub fn number_or(doc: &Value, key: &str, default: f64) -> f64 {
    doc.get(key).and_then(Value::as_f64).unwrap_or(default)
}

/// Numeric `daily[key][index]`, or `default`.
pub fn indexed_number_or(daily: &Value, key: &str, index: usize, default: f64) -> f64 {
    daily
        .get(key)
        .and_then(|arr| arr.get(index))
        .and_then(Value::as_f64)
        .unwrap_or(default)
}

/// True unless `doc` is an object with at least one key.
pub fn is_empty_document(doc: &Value) -> bool {
    doc.as_object().map_or(true, |map| map.is_empty())
}

/// Length of the array at `doc[key]`, zero when absent.
pub fn array_len(doc: &Value, key: &str) -> usize {
    doc.get(key).and_then(Value::as_array).map_or(0, Vec::len)
}
