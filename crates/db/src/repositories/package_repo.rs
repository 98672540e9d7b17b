//! Repository for the locally-authored `packages` table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::package::{CreatePackage, Package};

/// Column list for the `packages` table.
const COLUMNS: &str =
    "id, product_code, package_code, name, status, sort_order, created_at, updated_at";

/// Read operations for offerings, plus a fixture insert.
pub struct PackageRepo;

impl PackageRepo {
    /// Insert a new package (test fixtures and seeding tools; the admin
    /// CRUD surface lives outside this workspace).
    pub async fn create(pool: &PgPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let query = format!(
            "INSERT INTO packages (product_code, package_code, name, status, sort_order) \
             VALUES ($1, $2, $3, COALESCE($4, 'Active'), COALESCE($5, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(&input.product_code)
            .bind(&input.package_code)
            .bind(&input.name)
            .bind(&input.status)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List all packages under a product, in display order.
    pub async fn list_for_product(
        pool: &PgPool,
        product_code: &str,
    ) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM packages \
             WHERE product_code = $1 \
             ORDER BY sort_order, package_code"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(product_code)
            .fetch_all(pool)
            .await
    }

    /// Resolve an offering under a product by numeric package id or
    /// package-code string.
    pub async fn find_offering(
        pool: &PgPool,
        product_code: &str,
        offering: &str,
    ) -> Result<Option<Package>, sqlx::Error> {
        if let Ok(id) = offering.parse::<DbId>() {
            let query = format!(
                "SELECT {COLUMNS} FROM packages \
                 WHERE product_code = $1 AND (id = $2 OR package_code = $3)"
            );
            sqlx::query_as::<_, Package>(&query)
                .bind(product_code)
                .bind(id)
                .bind(offering)
                .fetch_optional(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM packages \
                 WHERE product_code = $1 AND package_code = $2"
            );
            sqlx::query_as::<_, Package>(&query)
                .bind(product_code)
                .bind(offering)
                .fetch_optional(pool)
                .await
        }
    }
}
