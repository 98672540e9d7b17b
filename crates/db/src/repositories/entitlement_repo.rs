//! Repository for the `entitlement_matrix` table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::entitlement::{CreateMatrixRow, EntitlementMatrixRow};

/// Column list for the `entitlement_matrix` table.
const COLUMNS: &str =
    "id, product_code, package_id, item_type, item_id, enabled, created_at, updated_at";

/// Read operations for the entitlement matrix, plus a fixture insert.
pub struct EntitlementRepo;

impl EntitlementRepo {
    /// Insert a matrix row (test fixtures and seeding tools).
    pub async fn create(
        pool: &PgPool,
        input: &CreateMatrixRow,
    ) -> Result<EntitlementMatrixRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO entitlement_matrix (product_code, package_id, item_type, item_id, enabled) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EntitlementMatrixRow>(&query)
            .bind(&input.product_code)
            .bind(input.package_id)
            .bind(input.kind.as_str())
            .bind(input.item_id)
            .bind(input.enabled)
            .fetch_one(pool)
            .await
    }

    /// Load every matrix row for one (product, package) pair, enabled or
    /// not; the resolver's partition step filters.
    pub async fn list_for_package(
        pool: &PgPool,
        product_code: &str,
        package_id: DbId,
    ) -> Result<Vec<EntitlementMatrixRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entitlement_matrix \
             WHERE product_code = $1 AND package_id = $2 \
             ORDER BY item_type, item_id"
        );
        sqlx::query_as::<_, EntitlementMatrixRow>(&query)
            .bind(product_code)
            .bind(package_id)
            .fetch_all(pool)
            .await
    }
}
