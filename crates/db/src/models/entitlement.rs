//! Entitlement matrix rows: sparse (product, package, item) -> enabled.

use backoffice_core::entitlement::{MatrixEntry, MatrixItemKind};
use backoffice_core::error::CoreError;
use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `entitlement_matrix` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntitlementMatrixRow {
    pub id: DbId,
    pub product_code: String,
    pub package_id: DbId,
    /// `feature` or `menu` (CHECK-constrained).
    pub item_type: String,
    pub item_id: DbId,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl EntitlementMatrixRow {
    /// Reduce to the typed entry the resolver's partition step consumes.
    pub fn entry(&self) -> Result<MatrixEntry, CoreError> {
        Ok(MatrixEntry {
            kind: MatrixItemKind::parse(&self.item_type)?,
            item_id: self.item_id,
            enabled: self.enabled,
        })
    }
}

/// Insert DTO (used by tests and seeding tools).
#[derive(Debug, Clone)]
pub struct CreateMatrixRow {
    pub product_code: String,
    pub package_id: DbId,
    pub kind: MatrixItemKind,
    pub item_id: DbId,
    pub enabled: bool,
}
