//! Handler for the permission-pruned navigation menu.

use std::collections::HashSet;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::navigation::build_allowed_forest;
use backoffice_db::repositories::{NavItemRepo, PermissionRepo};

use crate::error::AppResult;
use crate::middleware::identity::Identity;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/navigation/menu
///
/// The active navigation forest pruned to what the caller's level may
/// see: a node survives when it has a direct `access` grant or when any
/// descendant does, and each kept node carries its own direct `allowed`
/// flag. Output order follows `(parent_id, sort_order)`.
pub async fn menu(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<impl IntoResponse> {
    let allowed: HashSet<_> = PermissionRepo::allowed_nav_ids(&state.pool, identity.level_id)
        .await?
        .into_iter()
        .collect();
    let items = NavItemRepo::list_active(&state.pool).await?;

    let rows: Vec<_> = items.iter().map(|item| item.nav_row()).collect();
    let forest = build_allowed_forest(&rows, &allowed);

    Ok(Json(DataResponse { data: forest }))
}
