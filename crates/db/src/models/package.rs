//! Locally-authored offering (package) rows.
//!
//! Unlike the catalog tables these are not mirrored from the warehouse;
//! they are authored through the admin CRUD surface (outside this
//! workspace) and read by the entitlement resolver.

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `packages` table, keyed by (`product_code`, `package_code`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Package {
    pub id: DbId,
    pub product_code: String,
    pub package_code: String,
    pub name: String,
    pub status: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO (used by tests and seeding tools).
#[derive(Debug, Clone)]
pub struct CreatePackage {
    pub product_code: String,
    pub package_code: String,
    pub name: String,
    pub status: Option<String>,
    pub sort_order: Option<i32>,
}
