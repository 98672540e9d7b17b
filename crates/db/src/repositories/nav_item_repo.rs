//! Repository for the `nav_items` table.

use sqlx::PgPool;

use crate::models::nav_item::{CreateNavItem, NavItem};

/// Column list for the `nav_items` table.
const COLUMNS: &str =
    "id, slug, label, icon, parent_id, sort_order, is_active, created_at, updated_at";

/// Read operations for navigation items, plus a fixture insert.
pub struct NavItemRepo;

impl NavItemRepo {
    /// Insert a nav item (test fixtures and seeding tools).
    pub async fn create(pool: &PgPool, input: &CreateNavItem) -> Result<NavItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO nav_items (slug, label, icon, parent_id, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NavItem>(&query)
            .bind(&input.slug)
            .bind(&input.label)
            .bind(&input.icon)
            .bind(input.parent_id)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Load every active nav item in `(parent_id, sort_order)` order,
    /// the shape the tree builder expects.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<NavItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM nav_items \
             WHERE is_active = true \
             ORDER BY parent_id NULLS FIRST, sort_order, id"
        );
        sqlx::query_as::<_, NavItem>(&query).fetch_all(pool).await
    }
}
