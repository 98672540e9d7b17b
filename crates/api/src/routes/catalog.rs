//! Route definitions for the catalog mirror.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET  /products                             -> list_products
/// POST /products/sync                        -> sync_products
/// GET  /products/{id_or_code}                -> get_product
/// POST /products/{id_or_code}/sync           -> sync_one_product
/// GET  /products/{id_or_code}/features       -> list_features
/// POST /products/{id_or_code}/features/sync  -> sync_features
/// GET  /products/{id_or_code}/menus          -> list_menus
/// POST /products/{id_or_code}/menus/sync     -> sync_menus
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::list_products))
        .route("/products/sync", post(catalog::sync_products))
        .route("/products/{id_or_code}", get(catalog::get_product))
        .route("/products/{id_or_code}/sync", post(catalog::sync_one_product))
        .route("/products/{id_or_code}/features", get(catalog::list_features))
        .route(
            "/products/{id_or_code}/features/sync",
            post(catalog::sync_features),
        )
        .route("/products/{id_or_code}/menus", get(catalog::list_menus))
        .route(
            "/products/{id_or_code}/menus/sync",
            post(catalog::sync_menus),
        )
}
