//! Handlers for the `/catalog/products` resource.
//!
//! Read endpoints serve the local mirror; the `/sync` endpoints drive
//! the sync engine against the external warehouse source.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use backoffice_db::models::product::CatalogProduct;
use backoffice_db::repositories::{FeatureRepo, MenuRepo, ProductRepo};
use backoffice_warehouse::{ProductFilter, SyncReport};

use crate::error::{AppError, AppResult};
use crate::query::ProductListParams;
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// Response body for the sync trigger endpoints.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub count: usize,
    pub skipped: usize,
}

impl From<SyncReport> for SyncResponse {
    fn from(report: SyncReport) -> Self {
        SyncResponse {
            success: true,
            count: report.synced,
            skipped: report.skipped,
        }
    }
}

/// Mirror-read 404 body: `{message: "Not found"}`.
fn not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, Json(json!({"message": "Not found"}))).into_response()
}

async fn require_product(
    state: &AppState,
    reference: &str,
) -> Result<Result<CatalogProduct, axum::response::Response>, AppError> {
    match ProductRepo::find_by_id_or_code(&state.pool, reference).await? {
        Some(product) => Ok(Ok(product)),
        None => Ok(Err(not_found())),
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog/products?q=&page=&per_page=
///
/// Search / list mirrored products. With `per_page` the response is the
/// paginated `{data, links, meta}` envelope, otherwise `{data: [...]}`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<impl IntoResponse> {
    let q = params.q.as_deref().filter(|q| !q.is_empty());

    match params.per_page {
        Some(per_page) => {
            let per_page = per_page.clamp(1, 100);
            let page = params.page.unwrap_or(1).max(1);
            // Caller-supplied page numbers can be arbitrarily large;
            // saturate instead of overflowing into a negative OFFSET.
            let offset = (page - 1).saturating_mul(per_page);

            let data = ProductRepo::search(&state.pool, q, per_page, offset).await?;
            let total = ProductRepo::count(&state.pool, q).await?;
            let envelope =
                Paginated::new(data, "/api/v1/catalog/products", page, per_page, total);
            Ok(Json(envelope).into_response())
        }
        None => {
            let data = ProductRepo::search(&state.pool, q, i64::MAX, 0).await?;
            Ok(Json(DataResponse { data }).into_response())
        }
    }
}

/// GET /api/v1/catalog/products/{id_or_code}
pub async fn get_product(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<impl IntoResponse> {
    match require_product(&state, &reference).await? {
        Ok(product) => Ok(Json(DataResponse { data: product }).into_response()),
        Err(resp) => Ok(resp),
    }
}

/// POST /api/v1/catalog/products/sync
///
/// Pull the full product list from the warehouse and reconcile it into
/// the mirror.
pub async fn sync_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let report = state
        .sync_engine
        .sync_all_products(&ProductFilter::default())
        .await
        .map_err(AppError::from)?;
    Ok(Json(SyncResponse::from(report)))
}

/// POST /api/v1/catalog/products/{id_or_code}/sync
pub async fn sync_one_product(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = state
        .sync_engine
        .sync_one_product(&reference)
        .await
        .map_err(AppError::from)?;
    Ok(Json(DataResponse { data: product }))
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog/products/{id_or_code}/features
pub async fn list_features(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = match require_product(&state, &reference).await? {
        Ok(product) => product,
        Err(resp) => return Ok(resp),
    };
    let data = FeatureRepo::list_for_product(&state.pool, &product.product_code).await?;
    Ok(Json(DataResponse { data }).into_response())
}

/// POST /api/v1/catalog/products/{id_or_code}/features/sync
pub async fn sync_features(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<impl IntoResponse> {
    let report = state
        .sync_engine
        .sync_features(&reference)
        .await
        .map_err(AppError::from)?;
    Ok(Json(SyncResponse::from(report)))
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog/products/{id_or_code}/menus
pub async fn list_menus(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = match require_product(&state, &reference).await? {
        Ok(product) => product,
        Err(resp) => return Ok(resp),
    };
    let data = MenuRepo::list_for_product(&state.pool, &product.product_code).await?;
    Ok(Json(DataResponse { data }).into_response())
}

/// POST /api/v1/catalog/products/{id_or_code}/menus/sync
pub async fn sync_menus(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<impl IntoResponse> {
    let report = state
        .sync_engine
        .sync_menus(&reference)
        .await
        .map_err(AppError::from)?;
    Ok(Json(SyncResponse::from(report)))
}
