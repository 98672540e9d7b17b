//! Repository for the `permission_grants` table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::permission::{CreateGrant, PermissionGrant};

/// Column list for the `permission_grants` table.
const COLUMNS: &str = "id, level_id, nav_item_id, can_access, can_view, can_add, can_edit, \
    can_delete, can_approve, can_print, created_at, updated_at";

/// Read operations for permission grants, plus a fixture insert.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Insert a grant (test fixtures and seeding tools).
    pub async fn create(pool: &PgPool, input: &CreateGrant) -> Result<PermissionGrant, sqlx::Error> {
        let query = format!(
            "INSERT INTO permission_grants \
                (level_id, nav_item_id, can_access, can_view, can_add, can_edit, \
                 can_delete, can_approve, can_print) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PermissionGrant>(&query)
            .bind(input.level_id)
            .bind(input.nav_item_id)
            .bind(input.can_access)
            .bind(input.can_view)
            .bind(input.can_add)
            .bind(input.can_edit)
            .bind(input.can_delete)
            .bind(input.can_approve)
            .bind(input.can_print)
            .fetch_one(pool)
            .await
    }

    /// Nav item ids this level may access directly (the allowed set for
    /// tree pruning).
    pub async fn allowed_nav_ids(pool: &PgPool, level_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT nav_item_id FROM permission_grants \
             WHERE level_id = $1 AND can_access = true",
        )
        .bind(level_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// All grants for one level (consumed by the external permission
    /// gate; the core only serves the data).
    pub async fn list_for_level(
        pool: &PgPool,
        level_id: DbId,
    ) -> Result<Vec<PermissionGrant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM permission_grants \
             WHERE level_id = $1 \
             ORDER BY nav_item_id"
        );
        sqlx::query_as::<_, PermissionGrant>(&query)
            .bind(level_id)
            .fetch_all(pool)
            .await
    }
}
