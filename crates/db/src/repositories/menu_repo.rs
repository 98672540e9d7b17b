//! Repository for the `catalog_menus` mirror table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::menu::{CatalogMenu, UpsertMenu};

/// Column list for the `catalog_menus` table.
const COLUMNS: &str = "id, product_code, external_id, parent_external_id, title, icon, \
    route_path, menu_type, sort_order, is_active, created_at, updated_at";

/// Read and mirror-write operations for catalog menus.
pub struct MenuRepo;

impl MenuRepo {
    /// Insert-or-update one menu by (`product_code`, `external_id`).
    pub async fn upsert(pool: &PgPool, input: &UpsertMenu) -> Result<CatalogMenu, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM catalog_menus WHERE product_code = $1 AND external_id = $2",
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
        input: &UpsertMenu,
    ) -> Result<CatalogMenu, sqlx::Error> {
        let query = format!(
            "INSERT INTO catalog_menus \
                (product_code, external_id, parent_external_id, title, icon, route_path, \
                 menu_type, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogMenu>(&query)
            .bind(&input.product_code)
            .bind(input.external_id)
            .bind(input.parent_external_id)
            .bind(&input.title)
            .bind(&input.icon)
            .bind(&input.route_path)
            .bind(&input.menu_type)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    async fn update_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &UpsertMenu,
    ) -> Result<CatalogMenu, sqlx::Error> {
        let query = format!(
            "UPDATE catalog_menus SET \
                parent_external_id = $3, title = $4, icon = $5, route_path = $6, \
                menu_type = $7, sort_order = $8, is_active = $9, updated_at = now() \
             WHERE product_code = $1 AND external_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogMenu>(&query)
            .bind(&input.product_code)
            .bind(input.external_id)
            .bind(input.parent_external_id)
            .bind(&input.title)
            .bind(&input.icon)
            .bind(&input.route_path)
            .bind(&input.menu_type)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    /// List all mirrored menus for one product, in hierarchy order.
    pub async fn list_for_product(
        pool: &PgPool,
        product_code: &str,
    ) -> Result<Vec<CatalogMenu>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM catalog_menus \
             WHERE product_code = $1 \
             ORDER BY parent_external_id NULLS FIRST, sort_order, external_id"
        );
        sqlx::query_as::<_, CatalogMenu>(&query)
            .bind(product_code)
            .fetch_all(pool)
            .await
    }

    /// Hydrate full rows for a set of surrogate ids, ordered by
    /// (`parent_external_id`, `sort_order`).
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<CatalogMenu>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM catalog_menus \
             WHERE id = ANY($1) \
             ORDER BY parent_external_id NULLS FIRST, sort_order, external_id"
        );
        sqlx::query_as::<_, CatalogMenu>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
