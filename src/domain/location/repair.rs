//! Repair of loosely formatted model replies into strict JSON.
//!
//! The model is asked for a JSON array of locations but regularly answers with
//! trailing commas, single quotes, pretty-printing noise or a sentence of prose
//! around the array. [`repair_json`] runs four small rewrites in a fixed order:
//!
//! 1. [`strip_trailing_commas`]
//! 2. [`collapse_whitespace`]
//! 3. [`normalize_quotes`]
//! 4. [`extract_array`]
//!
//! # Known failure modes
//! These are consequences of the rewrites and are left as-is:
//! - An apostrophe inside free text (`Joe's Cafe`) becomes a double quote and
//!   breaks the string it sits in, so the whole reply fails to parse.
//! - Runs of whitespace inside string values are collapsed to one space.
//! - A `]` in commentary after the array widens the extracted span, which then
//!   fails to parse.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::{entity::LocationRecord, errors::LocationError};

lazy_static! {
    static ref TRAILING_COMMA: Regex = Regex::new(r"(?:,\s*)+([}\]])").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref ARRAY_SPAN: Regex = Regex::new(r"(?s)\[.*\]").unwrap();
}

/// Drops commas (and the whitespace after them) that directly precede `}` or `]`.
pub fn strip_trailing_commas(input: &str) -> String {
    TRAILING_COMMA.replace_all(input, "$1").into_owned()
}

pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input, " ").into_owned()
}

/// Every `'` becomes `"`, apostrophes included.
pub fn normalize_quotes(input: &str) -> String {
    input.replace('\'', "\"")
}

/// Keeps the span from the first `[` to the last `]`, or the input unchanged
/// when there is no such span.
pub fn extract_array(input: &str) -> &str {
    ARRAY_SPAN
        .find(input)
        .map(|m| m.as_str())
        .unwrap_or(input)
}

pub fn repair_json(raw: &str) -> String {
    let text = strip_trailing_commas(raw);
    let text = collapse_whitespace(&text);
    let text = normalize_quotes(&text);
    extract_array(&text).to_string()
}

/// Repairs `raw` and decodes it as a non-empty list of locations.
///
/// # Errors
/// - [`LocationError::Parse`] if the repaired text is not JSON, or an element
///   cannot be decoded as a [`LocationRecord`].
/// - [`LocationError::NoLocations`] if the JSON is not an array, or is empty.
pub fn parse_locations(raw: &str) -> Result<Vec<LocationRecord>, LocationError> {
    let repaired = repair_json(raw);
    let value: Value =
        serde_json::from_str(&repaired).map_err(|e| LocationError::Parse(e.to_string()))?;

    let items = match value {
        Value::Array(items) if !items.is_empty() => items,
        _ => return Err(LocationError::NoLocations),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<LocationRecord>(item)
                .map_err(|e| LocationError::Parse(format!("record {}: {}", idx, e)))
        })
        .collect()
}
