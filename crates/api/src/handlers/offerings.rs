//! Handlers for offerings (packages) and entitlement matrix resolution.
//!
//! Resolution is a pure read: resolve the offering, partition the
//! enabled matrix rows by item kind, then hydrate full catalog rows for
//! each non-empty set. Repeated calls with unchanged underlying data
//! return identical results, so callers may cache freely.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use backoffice_core::entitlement::{partition_enabled, MatrixEntry};
use backoffice_core::types::DbId;
use backoffice_db::models::feature::CatalogFeature;
use backoffice_db::models::menu::CatalogMenu;
use backoffice_db::models::package::Package;
use backoffice_db::repositories::{EntitlementRepo, FeatureRepo, MenuRepo, PackageRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// The offering identification echoed back in the matrix payload.
#[derive(Debug, Serialize)]
pub struct OfferingSummary {
    pub id: DbId,
    pub name: String,
    pub product_code: String,
}

impl From<&Package> for OfferingSummary {
    fn from(package: &Package) -> Self {
        OfferingSummary {
            id: package.id,
            name: package.name.clone(),
            product_code: package.product_code.clone(),
        }
    }
}

/// Resolved entitlement matrix for one (product, offering) pair.
#[derive(Debug, Serialize)]
pub struct MatrixData {
    pub offering: OfferingSummary,
    pub menus: Vec<CatalogMenu>,
    pub features: Vec<CatalogFeature>,
}

/// GET /api/v1/offerings/{product}
///
/// List packages under a product.
pub async fn list_offerings(
    State(state): State<AppState>,
    Path(product_code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let data = PackageRepo::list_for_product(&state.pool, &product_code).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/offerings/{product}/{offering}/matrix
///
/// Resolve the enabled menus and features for one offering. The
/// offering segment accepts a numeric package id or a package-code
/// string. Unknown offering answers 404 `{ok:false, error:"Offering not
/// found"}`; an offering with no enabled rows answers empty lists, not
/// an error.
pub async fn resolve_matrix(
    State(state): State<AppState>,
    Path((product_code, offering)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let Some(package) = PackageRepo::find_offering(&state.pool, &product_code, &offering).await?
    else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"ok": false, "error": "Offering not found"})),
        )
            .into_response());
    };

    let rows = EntitlementRepo::list_for_package(&state.pool, &product_code, package.id).await?;
    let entries: Vec<MatrixEntry> = rows
        .iter()
        .map(|row| row.entry())
        .collect::<Result<_, _>>()
        .map_err(AppError::Core)?;
    let sets = partition_enabled(&entries);

    // Empty sets short-circuit: no hydration query, empty list in the
    // response.
    let menus = if sets.menu_ids.is_empty() {
        Vec::new()
    } else {
        MenuRepo::find_by_ids(&state.pool, &sets.menu_ids).await?
    };
    let features = if sets.feature_ids.is_empty() {
        Vec::new()
    } else {
        FeatureRepo::find_by_ids(&state.pool, &sets.feature_ids).await?
    };

    let data = MatrixData {
        offering: OfferingSummary::from(&package),
        menus,
        features,
    };
    Ok(Json(json!({"ok": true, "data": data})).into_response())
}
