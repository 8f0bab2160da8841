//! Catalog CSV reader with encoding and delimiter auto-detection.
//!
//! Turns the export into [`Row`]s keyed by header name. No MOQ-specific
//! logic here.

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{CsvError, CsvResult};

// =============================================================================
// Row
// =============================================================================

/// One catalog row: column name to raw cell text.
///
/// Columns missing from the source line are simply not present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Build a row from a header line and one record. Cells beyond the
    /// header are dropped, headers beyond the record stay absent.
    pub fn from_record(headers: &[String], record: &StringRecord) -> Self {
        headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect()
    }

    /// Raw cell value, including empty strings.
    pub fn raw(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Cell value, or `None` when the column is absent or empty.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.raw(column).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// =============================================================================
// Parse results
// =============================================================================

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows in source order
    pub rows: Vec<Row>,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
    /// Column headers
    pub headers: Vec<String>,
}

/// A record read without header interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line where the record starts
    pub line: u64,
    pub fields: Vec<String>,
}

// =============================================================================
// Encoding / delimiter detection
// =============================================================================

const UTF8_BOM: &str = "\u{feff}";

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes with the given encoding label.
///
/// Unknown labels and invalid sequences fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).into_owned(),
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        label => match encoding_rs::Encoding::for_label(label.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.into_owned(),
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}

/// Decode a whole file, returning the text and the encoding used.
///
/// Valid UTF-8 is taken as-is; anything else goes through detection.
pub fn decode_auto(bytes: &[u8]) -> (String, String) {
    let (content, encoding) = match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), "utf-8".to_string()),
        Err(_) => {
            let encoding = detect_encoding(bytes);
            (decode_content(bytes, &encoding), encoding)
        }
    };

    match content.strip_prefix(UTF8_BOM) {
        Some(stripped) => (stripped.to_string(), encoding),
        None => (content, encoding),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Defaults to `,` when the header has a single column.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

fn delimiter_byte(delimiter: char) -> CsvResult<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(CsvError::InvalidDelimiter(delimiter))
    }
}

/// A line with no content at all. A line of bare delimiters is a row.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse CSV text with a header line into rows.
///
/// An export with no content yields no headers and no rows.
///
/// # Example
/// ```ignore
/// use catalog_moq::parse_csv;
///
/// let (headers, rows) = parse_csv("sku,moq\nA,5", ',').unwrap();
/// assert_eq!(headers, vec!["sku", "moq"]);
/// assert_eq!(rows[0].field("moq"), Some("5"));
/// ```
pub fn parse_csv(content: &str, delimiter: char) -> CsvResult<(Vec<String>, Vec<Row>)> {
    if content.trim().is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        rows.push(Row::from_record(&headers, &record));
    }

    Ok((headers, rows))
}

/// Parse CSV bytes, detecting encoding and (unless given) the delimiter.
pub fn parse_bytes_auto(bytes: &[u8], delimiter: Option<char>) -> CsvResult<ParseResult> {
    let (content, encoding) = decode_auto(bytes);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let (headers, rows) = parse_csv(&content, delimiter)?;

    Ok(ParseResult {
        rows,
        encoding,
        delimiter,
        headers,
    })
}

/// Parse a catalog file with auto-detection.
///
/// # Example
/// ```ignore
/// let result = parse_csv_file_auto("catalog.csv", None)?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Rows: {}", result.rows.len());
/// ```
pub fn parse_csv_file_auto<P: AsRef<Path>>(
    path: P,
    delimiter: Option<char>,
) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes, delimiter)
}

/// Read every record, header included, without mapping to columns.
pub fn read_raw_records(content: &str, delimiter: char) -> CsvResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        records.push(RawRecord {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_simple_csv() {
        let (headers, rows) = parse_csv("name,age\nAlice,30\nBob,25", ',').unwrap();

        assert_eq!(headers, vec!["name", "age"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("name"), Some("Alice"));
        assert_eq!(rows[1].field("age"), Some("25"));
    }

    #[test]
    fn test_quoted_values_keep_delimiters() {
        let csv = "product_sku,name\n\"A-1\",\"Booster, large\"";
        let (_, rows) = parse_csv(csv, ',').unwrap();

        assert_eq!(rows[0].field("product_sku"), Some("A-1"));
        assert_eq!(rows[0].field("name"), Some("Booster, large"));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let (_, rows) = parse_csv("a,b\n1,2\n\n3,4\n", ',').unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_empty_value_is_absent_field() {
        let (_, rows) = parse_csv("a,b,c\n1,,3", ',').unwrap();

        assert_eq!(rows[0].raw("b"), Some(""));
        assert_eq!(rows[0].field("b"), None);
        assert_eq!(rows[0].field("c"), Some("3"));
    }

    #[test]
    fn test_short_row_leaves_columns_absent() {
        let (_, rows) = parse_csv("a,b,c\n1", ',').unwrap();

        assert_eq!(rows[0].field("a"), Some("1"));
        assert_eq!(rows[0].raw("c"), None);
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn test_extra_cells_ignored() {
        let (_, rows) = parse_csv("a,b\n1,2,3,4", ',').unwrap();

        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].field("b"), Some("2"));
    }

    #[test]
    fn test_empty_export_yields_no_rows() {
        for content in ["", "  \n"] {
            let (headers, rows) = parse_csv(content, ',').unwrap();
            assert!(headers.is_empty());
            assert!(rows.is_empty());
        }
    }

    #[test]
    fn test_row_of_bare_delimiters_is_kept() {
        let (_, rows) = parse_csv("type,product_sku\n,\nproduct,A\n", ',').unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].raw("type"), Some(""));
        assert_eq!(rows[0].field("product_sku"), None);
        assert_eq!(rows[1].field("product_sku"), Some("A"));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        assert!(matches!(
            parse_csv("a§b\n1§2", '§'),
            Err(CsvError::InvalidDelimiter('§'))
        ));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), '|');
        assert_eq!(detect_delimiter("single\nvalue"), ',');
    }

    #[test]
    fn test_auto_parse() {
        let result = parse_bytes_auto(b"name;age\nAlice;30\nBob;25", None).unwrap();

        assert_eq!(result.delimiter, ';');
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.headers, vec!["name", "age"]);
    }

    #[test]
    fn test_explicit_delimiter_wins() {
        let result = parse_bytes_auto(b"a;b,c\n1;2,3", Some(',')).unwrap();

        assert_eq!(result.delimiter, ',');
        assert_eq!(result.headers, vec!["a;b", "c"]);
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"product_sku,moq\nA,1");
        let result = parse_bytes_auto(&bytes, None).unwrap();

        assert_eq!(result.headers[0], "product_sku");
        assert_eq!(result.rows[0].field("product_sku"), Some("A"));
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_raw_records_report_lines() {
        let records = read_raw_records("h1,h2\n\"multi\nline\",x\nlast,y", ',').unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].fields, vec!["multi\nline", "x"]);
        assert_eq!(records[2].line, 4);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "product_sku,product_attribute_MOQ\nSKU-1,4\n").unwrap();

        let result = parse_csv_file_auto(file.path(), None).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].field("product_attribute_MOQ"), Some("4"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse_csv_file_auto("/nonexistent/catalog.csv", None);
        assert!(matches!(result, Err(CsvError::IoError(_))));
    }

    #[test]
    fn test_row_from_pairs() {
        let row: Row = [("a", "1"), ("b", "")].into_iter().collect();
        assert_eq!(row.field("a"), Some("1"));
        assert_eq!(row.field("b"), None);
        assert_eq!(row.field("c"), None);
        assert!(!row.is_empty());
    }

}
