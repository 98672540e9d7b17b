//! Catalog feature mirror rows, keyed by (`product_code`, `external_id`).

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `catalog_features` table.
///
/// `external_id` comes from the warehouse; the local surrogate `id` is
/// what entitlement matrix rows join against.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogFeature {
    pub id: DbId,
    pub product_code: String,
    pub external_id: i64,
    pub feature_code: String,
    pub name: String,
    pub module_name: Option<String>,
    /// `FEATURE` or `SUBFEATURE` (CHECK-constrained).
    pub item_type: String,
    pub parent_external_id: Option<i64>,
    pub is_active: bool,
    pub sort_order: i32,
    pub price_addon: f64,
    pub is_trial: bool,
    pub trial_days: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Mirror write DTO for one upstream feature item.
#[derive(Debug, Clone)]
pub struct UpsertFeature {
    pub product_code: String,
    pub external_id: i64,
    pub feature_code: String,
    pub name: String,
    pub module_name: Option<String>,
    pub item_type: String,
    pub parent_external_id: Option<i64>,
    pub is_active: bool,
    pub sort_order: i32,
    pub price_addon: f64,
    pub is_trial: bool,
    pub trial_days: i32,
}
