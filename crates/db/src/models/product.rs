//! Catalog product mirror rows.
//!
//! The external warehouse service owns this data; rows are created and
//! updated exclusively by the sync engine, keyed by `product_code`.

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `catalog_products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogProduct {
    pub id: DbId,
    pub product_code: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub description: Option<String>,
    pub db_name: Option<String>,
    pub total_features: i32,
    pub upstream_updated_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Mirror write DTO: the upstream fields the sync engine reconciles.
///
/// Local-only columns (`id`, `created_at`) are never touched on update.
#[derive(Debug, Clone)]
pub struct UpsertProduct {
    pub product_code: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub description: Option<String>,
    pub db_name: Option<String>,
    pub total_features: i32,
    pub upstream_updated_at: Option<Timestamp>,
}
