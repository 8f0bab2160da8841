//! Error types for the catalog MOQ pipeline.
//!
//! - [`CsvError`] - reading and parsing the catalog export
//! - [`RowError`] - why a single row produced no update record
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Row errors never escape a pass: they are counted and the row is
//! discarded. Only [`CsvError`] and output failures abort.

use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading the catalog export.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Delimiter must be a single ASCII character.
    #[error("Unsupported delimiter: {0:?}")]
    InvalidDelimiter(char),

    /// A record could not be parsed.
    #[error("Invalid CSV at line {line}: {message}")]
    ParseError { line: u64, message: String },
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CsvError::IoError(io),
            kind => CsvError::ParseError {
                line,
                message: format!("{:?}", kind),
            },
        }
    }
}

// =============================================================================
// Row Errors
// =============================================================================

/// Reason a catalog row was discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Required column absent or empty.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Value present but not usable as the expected type or range.
    #[error("Invalid value for field '{column}': '{value}'")]
    InvalidFormat { column: &'static str, value: String },
}

impl RowError {
    /// Short grouping key, e.g. `missing product_sku`.
    pub fn reason_key(&self) -> String {
        match self {
            RowError::MissingField(column) => format!("missing {}", column),
            RowError::InvalidFormat { column, .. } => format!("invalid {}", column),
        }
    }
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Payload serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the payload failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
