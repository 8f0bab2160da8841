//! Domain models for the catalog MOQ pipeline.
//!
//! - [`UpdateRecord`] - one minimum-order-quantity update for a catalog item
//! - [`columns`] - catalog export column names the pipeline reads

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Columns
// =============================================================================

/// Column names of the catalog export.
pub mod columns {
    /// Minimum order quantity attribute.
    pub const MOQ: &str = "product_attribute_MOQ";
    /// Numeric identifier assigned by the external catalog.
    pub const INTERNAL_ID: &str = "product_internal_id";
    /// Primary SKU.
    pub const SKU: &str = "product_sku";
    /// SKU of a product variation, used when the primary SKU is empty.
    pub const VARIATION_SKU: &str = "product_variation_sku";
    /// Row type (product or variation).
    pub const TYPE: &str = "type";
}

// =============================================================================
// Update Record
// =============================================================================

/// A validated MOQ update for one catalog item.
///
/// Only built by [`crate::transform::try_transform`], so every instance has
/// a positive finite `moq` and a non-empty `sku`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    /// Catalog item identifier in the external system.
    pub ecwid_id: i64,
    /// Stock-keeping unit.
    pub sku: String,
    /// Minimum order quantity. May carry a fractional part.
    pub moq: f64,
}
