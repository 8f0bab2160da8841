//! # Catalog MOQ - minimum order quantity updates from a catalog export
//!
//! Reads a product catalog CSV export and builds the payload of
//! minimum-order-quantity updates for the external catalog.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Catalog CSV │────▶│   Parser    │────▶│  Transform  │────▶│ Update JSON │
//! │  (UTF-8)    │     │  (Row map)  │     │ (per row)   │     │  (array)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Rows that lack a usable MOQ, identifier or SKU are discarded, never
//! reported as errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_moq::{parse_csv_file_auto, prepare_updates};
//!
//! let parsed = parse_csv_file_auto("catalog.csv", None)?;
//! let outcome = prepare_updates(&parsed.rows);
//! println!("{}", outcome.summary());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - `UpdateRecord` and catalog column names
//! - [`parser`] - CSV reading and the `Row` accessor
//! - [`transform`] - Row transformation and the prepare pass
//! - [`inspect`] - Row preview and text search
//! - [`logs`] - Progress logging
//! - [`config`] - Defaults and environment variable names

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Inspection
pub mod inspect;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, PipelineError, RowError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{columns, UpdateRecord};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_auto,
    detect_delimiter,
    detect_encoding,
    parse_bytes_auto,
    parse_csv,
    parse_csv_file_auto,
    ParseResult,
    RawRecord,
    Row,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    prepare_file,
    prepare_updates,
    resolve_sku,
    transform,
    try_transform,
    write_updates,
    write_updates_to,
    CsvInfo,
    PrepareOptions,
    PrepareOutcome,
    PrepareRun,
};

// =============================================================================
// Re-exports - Inspect
// =============================================================================

pub use inspect::{preview_rows, search_bytes, PreviewRow, SearchMatch};
