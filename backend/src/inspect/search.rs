//! Case-insensitive text search across raw catalog records.

use serde::Serialize;
use std::fmt;

use crate::error::CsvResult;
use crate::parser::{decode_content, read_raw_records, RawRecord};

/// A record containing the search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// 1-based line where the record starts
    pub line: u64,
    /// Record cells joined with `,`
    pub text: String,
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match at line {}: {}", self.line, self.text)
    }
}

/// Records whose joined text contains `term`, ignoring case.
pub fn search_records(records: &[RawRecord], term: &str) -> Vec<SearchMatch> {
    let needle = term.to_lowercase();

    records
        .iter()
        .filter_map(|record| {
            let text = record.fields.join(",");
            text.to_lowercase().contains(&needle).then(|| SearchMatch {
                line: record.line,
                text,
            })
        })
        .collect()
}

/// Search raw file bytes as UTF-8, replacing invalid sequences.
/// The header line is searched too.
pub fn search_bytes(bytes: &[u8], delimiter: char, term: &str) -> CsvResult<Vec<SearchMatch>> {
    let content = decode_content(bytes, "utf-8");
    let records = read_raw_records(&content, delimiter)?;
    Ok(search_records(&records, term))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "name,product_sku\n\"Booster, red\",B-1\nCable,C-1\nbooster pack,B-2\n";

    #[test]
    fn test_case_insensitive_matches() {
        let matches = search_bytes(CATALOG.as_bytes(), ',', "BOOSTER").unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].line, 2);
        assert_eq!(matches[0].text, "Booster, red,B-1");
        assert_eq!(matches[1].to_string(), "Match at line 4: booster pack,B-2");
    }

    #[test]
    fn test_header_is_searchable() {
        let matches = search_bytes(CATALOG.as_bytes(), ',', "product_sku").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line, 1);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut bytes = b"name\nBooster ".to_vec();
        bytes.push(0xFF);
        let matches = search_bytes(&bytes, ',', "booster").unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_no_matches() {
        assert!(search_bytes(CATALOG.as_bytes(), ',', "zzz").unwrap().is_empty());
    }
}
