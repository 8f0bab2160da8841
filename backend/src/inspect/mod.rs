//! Ad-hoc catalog inspection: sample rows and free-text search.

pub mod preview;
pub mod search;

pub use preview::{preview_rows, PreviewRow};
pub use search::{search_bytes, search_records, SearchMatch};
