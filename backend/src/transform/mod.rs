//! Transformation module.
//!
//! - Row: one catalog row to one optional update record
//! - Pipeline: a full pass over the export and payload output

pub mod pipeline;
pub mod row;

pub use pipeline::*;
pub use row::{resolve_sku, transform, try_transform};
