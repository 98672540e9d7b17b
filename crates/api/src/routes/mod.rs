pub mod catalog;
pub mod health;
pub mod navigation;
pub mod offerings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog/products                              list/search (GET), sync all (POST /sync)
/// /catalog/products/{id_or_code}                 get (GET), sync one (POST /sync)
/// /catalog/products/{id_or_code}/features        mirror read (GET), sync (POST /sync)
/// /catalog/products/{id_or_code}/menus           mirror read (GET), sync (POST /sync)
///
/// /offerings/{product}                           list packages (GET)
/// /offerings/{product}/{offering}/matrix         resolved entitlements (GET)
///
/// /navigation/menu                               permission-pruned forest (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/offerings", offerings::router())
        .nest("/navigation", navigation::router())
}
