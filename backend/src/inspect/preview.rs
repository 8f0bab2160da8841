//! First rows of the export, reduced to the columns the MOQ pass reads.

use serde::Serialize;
use std::fmt;

use crate::models::columns;
use crate::parser::Row;
use crate::transform::resolve_sku;

/// Summary of one catalog row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    /// 0-based data row index
    pub index: usize,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Primary SKU, or the variation SKU when the primary is empty
    pub sku: Option<String>,
    /// Raw MOQ cell
    pub moq: Option<String>,
}

impl PreviewRow {
    pub fn from_row(index: usize, row: &Row) -> Self {
        Self {
            index,
            kind: row.raw(columns::TYPE).map(String::from),
            sku: resolve_sku(row).map(String::from),
            moq: row.raw(columns::MOQ).map(String::from),
        }
    }
}

impl fmt::Display for PreviewRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {}: Type: {}, SKU: {}, MOQ: {}",
            self.index,
            self.kind.as_deref().unwrap_or("-"),
            self.sku.as_deref().unwrap_or("-"),
            self.moq.as_deref().unwrap_or("-"),
        )
    }
}

/// Summaries of the first `limit` rows.
pub fn preview_rows(rows: &[Row], limit: usize) -> Vec<PreviewRow> {
    rows.iter()
        .take(limit)
        .enumerate()
        .map(|(i, row)| PreviewRow::from_row(i, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    #[test]
    fn test_preview_limits_and_resolves_sku() {
        let csv = "type,product_sku,product_variation_sku,product_attribute_MOQ\n\
                   product,P-1,,4\n\
                   variation,,V-1,\n\
                   product,P-3,,1\n";
        let (_, rows) = parse_csv(csv, ',').unwrap();

        let preview = preview_rows(&rows, 2);
        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].sku.as_deref(), Some("P-1"));
        assert_eq!(preview[1].sku.as_deref(), Some("V-1"));
        assert_eq!(preview[1].moq.as_deref(), Some(""));
    }

    #[test]
    fn test_display_line() {
        let row: Row = [("type", "product"), ("product_sku", "A")].into_iter().collect();
        let line = PreviewRow::from_row(3, &row).to_string();
        assert_eq!(line, "Row 3: Type: product, SKU: A, MOQ: -");
    }
}
