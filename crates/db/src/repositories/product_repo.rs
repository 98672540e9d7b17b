//! Repository for the `catalog_products` mirror table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::product::{CatalogProduct, UpsertProduct};

/// Column list for the `catalog_products` table.
const COLUMNS: &str = "id, product_code, name, category, status, description, db_name, \
    total_features, upstream_updated_at, created_at, updated_at";

/// Read and mirror-write operations for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert-or-update one product by its natural key (`product_code`).
    ///
    /// Reads by natural key inside a transaction and branches to insert
    /// or update. A unique violation on the insert branch means another
    /// sync committed the same code concurrently; the row is re-written
    /// as an update so the batch item still lands (last write wins).
    pub async fn upsert(pool: &PgPool, input: &UpsertProduct) -> Result<CatalogProduct, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing = Self::find_by_code_tx(&mut tx, &input.product_code).await?;
        let row = match existing {
            Some(_) => Self::update_tx(&mut tx, input).await?,
            None => match Self::insert_tx(&mut tx, input).await {
                Ok(row) => row,
                Err(err) if crate::is_unique_violation(&err) => {
                    // Lost the insert race; the row now exists.
                    tx.rollback().await?;
                    tx = pool.begin().await?;
                    Self::update_tx(&mut tx, input).await?
                }
                Err(err) => return Err(err),
            },
        };

        tx.commit().await?;
        Ok(row)
    }

    async fn find_by_code_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        product_code: &str,
    ) -> Result<Option<CatalogProduct>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog_products WHERE product_code = $1");
        sqlx::query_as::<_, CatalogProduct>(&query)
            .bind(product_code)
            .fetch_optional(&mut **tx)
            .await
    }

    async fn insert_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &UpsertProduct,
    ) -> Result<CatalogProduct, sqlx::Error> {
        let query = format!(
            "INSERT INTO catalog_products \
                (product_code, name, category, status, description, db_name, \
                 total_features, upstream_updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogProduct>(&query)
            .bind(&input.product_code)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.status)
            .bind(&input.description)
            .bind(&input.db_name)
            .bind(input.total_features)
            .bind(input.upstream_updated_at)
            .fetch_one(&mut **tx)
            .await
    }

    /// Update the mutable mirror fields only; `id` and `created_at`
    /// stay untouched.
    async fn update_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &UpsertProduct,
    ) -> Result<CatalogProduct, sqlx::Error> {
        let query = format!(
            "UPDATE catalog_products SET \
                name = $2, category = $3, status = $4, description = $5, \
                db_name = $6, total_features = $7, upstream_updated_at = $8, \
                updated_at = now() \
             WHERE product_code = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogProduct>(&query)
            .bind(&input.product_code)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.status)
            .bind(&input.description)
            .bind(&input.db_name)
            .bind(input.total_features)
            .bind(input.upstream_updated_at)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a product by numeric id or natural code.
    pub async fn find_by_id_or_code(
        pool: &PgPool,
        reference: &str,
    ) -> Result<Option<CatalogProduct>, sqlx::Error> {
        if let Ok(id) = reference.parse::<DbId>() {
            let query =
                format!("SELECT {COLUMNS} FROM catalog_products WHERE id = $1 OR product_code = $2");
            sqlx::query_as::<_, CatalogProduct>(&query)
                .bind(id)
                .bind(reference)
                .fetch_optional(pool)
                .await
        } else {
            let query = format!("SELECT {COLUMNS} FROM catalog_products WHERE product_code = $1");
            sqlx::query_as::<_, CatalogProduct>(&query)
                .bind(reference)
                .fetch_optional(pool)
                .await
        }
    }

    /// Search products by name or code substring, newest first.
    pub async fn search(
        pool: &PgPool,
        q: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CatalogProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM catalog_products \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' \
                    OR product_code ILIKE '%' || $1 || '%') \
             ORDER BY product_code \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CatalogProduct>(&query)
            .bind(q)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count products matching the same predicate as [`search`](Self::search).
    pub async fn count(pool: &PgPool, q: Option<&str>) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM catalog_products \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' \
                    OR product_code ILIKE '%' || $1 || '%')",
        )
        .bind(q)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
