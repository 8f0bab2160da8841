//! Defaults shared by the CLI and the library.
//!
//! Values here can be overridden per invocation through CLI flags or the
//! environment variables named below (a `.env` file is honoured).

/// Payload file written by `prepare` when no output is given.
pub const DEFAULT_OUTPUT: &str = "moq_updates.json";

/// Output path meaning "write to stdout".
pub const STDOUT_PATH: &str = "-";

/// Rows shown by `preview`.
pub const DEFAULT_PREVIEW_ROWS: usize = 21;

/// Catalog export path.
pub const ENV_CATALOG: &str = "CATALOG_CSV";

/// Payload output path.
pub const ENV_OUTPUT: &str = "MOQ_OUTPUT";

/// Forced CSV delimiter.
pub const ENV_DELIMITER: &str = "CATALOG_DELIMITER";

/// Discard reasons listed individually in the pass summary.
pub const MAX_REASONS_SHOWN: usize = 5;
