//! Navigation items: a self-referential hierarchy keyed by `slug`.

use backoffice_core::navigation::NavRow;
use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `nav_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NavItem {
    pub id: DbId,
    pub slug: String,
    pub label: String,
    pub icon: Option<String>,
    pub parent_id: Option<DbId>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NavItem {
    /// Reduce to the flat row the tree builder consumes.
    pub fn nav_row(&self) -> NavRow {
        NavRow {
            id: self.id,
            slug: self.slug.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            parent_id: self.parent_id,
            sort_order: self.sort_order,
        }
    }
}

/// Insert DTO (used by tests and seeding tools).
#[derive(Debug, Clone)]
pub struct CreateNavItem {
    pub slug: String,
    pub label: String,
    pub icon: Option<String>,
    pub parent_id: Option<DbId>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
