//! Per-level, per-nav-item permission grants.

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `permission_grants` table, unique per
/// (`level_id`, `nav_item_id`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PermissionGrant {
    pub id: DbId,
    pub level_id: DbId,
    pub nav_item_id: DbId,
    pub can_access: bool,
    pub can_view: bool,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_approve: bool,
    pub can_print: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO (used by tests and seeding tools). Capabilities default
/// to `false` at the schema level.
#[derive(Debug, Clone, Default)]
pub struct CreateGrant {
    pub level_id: DbId,
    pub nav_item_id: DbId,
    pub can_access: bool,
    pub can_view: bool,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_approve: bool,
    pub can_print: bool,
}
