//! Repository for the `catalog_features` mirror table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::feature::{CatalogFeature, UpsertFeature};

/// Column list for the `catalog_features` table.
const COLUMNS: &str = "id, product_code, external_id, feature_code, name, module_name, \
    item_type, parent_external_id, is_active, sort_order, price_addon, is_trial, \
    trial_days, created_at, updated_at";

/// Read and mirror-write operations for catalog features.
pub struct FeatureRepo;

impl FeatureRepo {
    /// Insert-or-update one feature by (`product_code`, `external_id`).
    ///
    /// Same reconciliation rule as products: existing key updates the
    /// mutable mirror fields, a racing insert is retried as an update.
    pub async fn upsert(pool: &PgPool, input: &UpsertFeature) -> Result<CatalogFeature, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM catalog_features WHERE product_code = $1 AND external_id = $2",
        )
        .bind(&input.product_code)
        .bind(input.external_id)
        .fetch_optional(&mut *tx)
        .await?;

        let row = match existing {
            Some(_) => Self::update_tx(&mut tx, input).await?,
            None => match Self::insert_tx(&mut tx, input).await {
                Ok(row) => row,
                Err(err) if crate::is_unique_violation(&err) => {
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

    async fn insert_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &UpsertFeature,
    ) -> Result<CatalogFeature, sqlx::Error> {
        let query = format!(
            "INSERT INTO catalog_features \
                (product_code, external_id, feature_code, name, module_name, item_type, \
                 parent_external_id, is_active, sort_order, price_addon, is_trial, trial_days) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogFeature>(&query)
            .bind(&input.product_code)
            .bind(input.external_id)
            .bind(&input.feature_code)
            .bind(&input.name)
            .bind(&input.module_name)
            .bind(&input.item_type)
            .bind(input.parent_external_id)
            .bind(input.is_active)
            .bind(input.sort_order)
            .bind(input.price_addon)
            .bind(input.is_trial)
            .bind(input.trial_days)
            .fetch_one(&mut **tx)
            .await
    }

    async fn update_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &UpsertFeature,
    ) -> Result<CatalogFeature, sqlx::Error> {
        let query = format!(
            "UPDATE catalog_features SET \
                feature_code = $3, name = $4, module_name = $5, item_type = $6, \
                parent_external_id = $7, is_active = $8, sort_order = $9, \
                price_addon = $10, is_trial = $11, trial_days = $12, updated_at = now() \
             WHERE product_code = $1 AND external_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogFeature>(&query)
            .bind(&input.product_code)
            .bind(input.external_id)
            .bind(&input.feature_code)
            .bind(&input.name)
            .bind(&input.module_name)
            .bind(&input.item_type)
            .bind(input.parent_external_id)
            .bind(input.is_active)
            .bind(input.sort_order)
            .bind(input.price_addon)
            .bind(input.is_trial)
            .bind(input.trial_days)
            .fetch_one(&mut **tx)
            .await
    }

    /// List all mirrored features for one product, in display order.
    pub async fn list_for_product(
        pool: &PgPool,
        product_code: &str,
    ) -> Result<Vec<CatalogFeature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM catalog_features \
             WHERE product_code = $1 \
             ORDER BY sort_order, external_id"
        );
        sqlx::query_as::<_, CatalogFeature>(&query)
            .bind(product_code)
            .fetch_all(pool)
            .await
    }

    /// Hydrate full rows for a set of surrogate ids, ordered by `sort_order`.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<CatalogFeature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM catalog_features \
             WHERE id = ANY($1) \
             ORDER BY sort_order, external_id"
        );
        sqlx::query_as::<_, CatalogFeature>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
