//! Catalog row to [`UpdateRecord`] transformation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! ```text
//! MOQ present → MOQ numeric and > 0 → id present → id integer → SKU or variation SKU
//! ```

use crate::error::RowError;
use crate::models::{columns, UpdateRecord};
use crate::parser::Row;

/// Transform a row, or report why it was discarded.
pub fn try_transform(row: &Row) -> Result<UpdateRecord, RowError> {
    let moq = parse_moq(required(row, columns::MOQ)?)?;
    let ecwid_id = parse_id(required(row, columns::INTERNAL_ID)?)?;
    let sku = resolve_sku(row).ok_or(RowError::MissingField(columns::SKU))?;

    Ok(UpdateRecord {
        ecwid_id,
        sku: sku.to_string(),
        moq,
    })
}

/// Transform a row, discarding it silently when any check fails.
pub fn transform(row: &Row) -> Option<UpdateRecord> {
    try_transform(row).ok()
}

/// Primary SKU, falling back to the variation SKU.
pub fn resolve_sku(row: &Row) -> Option<&str> {
    row.field(columns::SKU)
        .or_else(|| row.field(columns::VARIATION_SKU))
}

fn required<'a>(row: &'a Row, column: &'static str) -> Result<&'a str, RowError> {
    row.field(column).ok_or(RowError::MissingField(column))
}

fn parse_moq(raw: &str) -> Result<f64, RowError> {
    let parsed = strip_digit_separators(raw.trim()).and_then(|s| s.parse::<f64>().ok());
    match parsed {
        Some(moq) if moq.is_finite() && moq > 0.0 => Ok(moq),
        _ => Err(invalid(columns::MOQ, raw)),
    }
}

fn parse_id(raw: &str) -> Result<i64, RowError> {
    strip_digit_separators(raw.trim())
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| invalid(columns::INTERNAL_ID, raw))
}

/// Drop `_` separators, which are only allowed singly between two digits
/// (`1_000`). Any other underscore makes the number invalid.
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

fn invalid(column: &'static str, value: &str) -> RowError {
    RowError::InvalidFormat {
        column,
        value: value.to_string(),
    }
}
