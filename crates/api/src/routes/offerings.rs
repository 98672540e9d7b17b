//! Route definitions for offerings and entitlement resolution.

use axum::routing::get;
use axum::Router;

use crate::handlers::offerings;
use crate::state::AppState;

/// Routes mounted at `/offerings`.
///
/// ```text
/// GET /{product}                      -> list_offerings
/// GET /{product}/{offering}/matrix    -> resolve_matrix
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{product}", get(offerings::list_offerings))
        .route("/{product}/{offering}/matrix", get(offerings::resolve_matrix))
}
