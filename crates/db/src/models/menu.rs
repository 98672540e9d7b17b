//! Catalog menu mirror rows, keyed by (`product_code`, `external_id`).

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `catalog_menus` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogMenu {
    pub id: DbId,
    pub product_code: String,
    pub external_id: i64,
    pub parent_external_id: Option<i64>,
    pub title: String,
    pub icon: Option<String>,
    pub route_path: Option<String>,
    pub menu_type: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Mirror write DTO for one upstream menu item.
#[derive(Debug, Clone)]
pub struct UpsertMenu {
    pub product_code: String,
    pub external_id: i64,
    pub parent_external_id: Option<i64>,
    pub title: String,
    pub icon: Option<String>,
    pub route_path: Option<String>,
    pub menu_type: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}
