//! Route definitions for the permission-gated navigation menu.

use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Routes mounted at `/navigation`.
///
/// ```text
/// GET /menu    -> menu (pruned for the caller's level)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/menu", get(navigation::menu))
}
