//! Catalog sync engine: pulls products, features, and menus from the
//! warehouse and reconciles them into the mirror tables.
//!
//! Reconciliation is natural-key upsert with per-item transactions: a
//! transport failure aborts the rest of the batch but leaves already
//! committed items in place, and the report carries the partial count.
//! Items missing their natural key are skipped and counted, never
//! fatal. Upstream deletions are not detected; mirror rows whose key no
//! longer appears upstream are retained unchanged (a deliberate,
//! configurable-later policy, not a bug).

use backoffice_db::models::feature::UpsertFeature;
use backoffice_db::models::menu::UpsertMenu;
use backoffice_db::models::product::{CatalogProduct, UpsertProduct};
use backoffice_db::repositories::{FeatureRepo, MenuRepo, ProductRepo};
use backoffice_db::DbPool;

use crate::client::{WarehouseClient, WarehouseError};
use crate::payload::{FeaturePayload, MenuPayload, ProductPayload};

/// Optional search / pagination passed through to the warehouse list
/// endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Outcome of one sync run.
///
/// `synced` counts upserted rows, `skipped` counts upstream items that
/// lacked their natural key and were dropped without aborting the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: usize,
    pub skipped: usize,
}

/// Errors from a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The warehouse fetch failed or timed out; the remaining batch was
    /// aborted. Items committed before the failure stay committed.
    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] WarehouseError),

    /// A local write failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The referenced product does not exist (locally for nested syncs,
    /// upstream for single-product sync).
    #[error("Product not found: {reference}")]
    ProductNotFound { reference: String },

    /// A single-item sync received an item without its natural key.
    #[error("Malformed upstream item: {0}")]
    MalformedItem(String),
}

/// Pulls catalog data from one warehouse source into the mirror tables.
///
/// Stateless between calls; safe to share behind an `Arc`. Concurrent
/// runs over overlapping products are not coordinated here -- the
/// natural-key unique constraints serialize racing inserts and the last
/// writer wins at the row level.
pub struct CatalogSyncEngine {
    pool: DbPool,
    client: WarehouseClient,
}

impl CatalogSyncEngine {
    pub fn new(pool: DbPool, client: WarehouseClient) -> Self {
        Self { pool, client }
    }

    /// Fetch the product list and upsert each item by `product_code`.
    ///
    /// Idempotent: unchanged upstream data yields no new rows and
    /// unchanged field values.
    pub async fn sync_all_products(&self, filter: &ProductFilter) -> Result<SyncReport, SyncError> {
        let items = self.client.list_products(filter).await?;
        let (plans, skipped) = plan_products(items);

        let mut synced = 0;
        for plan in &plans {
            ProductRepo::upsert(&self.pool, plan).await?;
            synced += 1;
        }

        let report = SyncReport { synced, skipped };
        tracing::info!(synced, skipped, "Product sync complete");
        Ok(report)
    }

    /// Fetch and upsert a single product by numeric id or natural code.
    pub async fn sync_one_product(&self, reference: &str) -> Result<CatalogProduct, SyncError> {
        let payload = match self.client.get_product(reference).await {
            Ok(payload) => payload,
            Err(err) if err.status() == Some(404) => {
                return Err(SyncError::ProductNotFound {
                    reference: reference.to_string(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        let plan = plan_product(payload).ok_or_else(|| {
            SyncError::MalformedItem(format!("product '{reference}' has no product_code"))
        })?;
        Ok(ProductRepo::upsert(&self.pool, &plan).await?)
    }

    /// Fetch the nested feature collection for one locally-known
    /// product and upsert each item by (`product_code`, `external_id`).
    pub async fn sync_features(&self, reference: &str) -> Result<SyncReport, SyncError> {
        let product = self.resolve_local_product(reference).await?;
        let items = self.client.list_features(&product.product_code).await?;
        let (plans, skipped) = plan_features(&product.product_code, items);

        let mut synced = 0;
        for plan in &plans {
            FeatureRepo::upsert(&self.pool, plan).await?;
            synced += 1;
        }

        let report = SyncReport { synced, skipped };
        tracing::info!(
            product_code = %product.product_code,
            synced,
            skipped,
            "Feature sync complete"
        );
        Ok(report)
    }

    /// Fetch the nested menu collection for one locally-known product
    /// and upsert each item. An upstream 404 means "no menus" and
    /// resolves to an empty report, not an error.
    pub async fn sync_menus(&self, reference: &str) -> Result<SyncReport, SyncError> {
        let product = self.resolve_local_product(reference).await?;
        let items = self.client.list_menus(&product.product_code).await?;
        let (plans, skipped) = plan_menus(&product.product_code, items);

        let mut synced = 0;
        for plan in &plans {
            MenuRepo::upsert(&self.pool, plan).await?;
            synced += 1;
        }

        let report = SyncReport { synced, skipped };
        tracing::info!(
            product_code = %product.product_code,
            synced,
            skipped,
            "Menu sync complete"
        );
        Ok(report)
    }

    async fn resolve_local_product(&self, reference: &str) -> Result<CatalogProduct, SyncError> {
        ProductRepo::find_by_id_or_code(&self.pool, reference)
            .await?
            .ok_or_else(|| SyncError::ProductNotFound {
                reference: reference.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Batch planning (pure)
// ---------------------------------------------------------------------------

/// Convert one upstream product into a mirror write, or `None` when the
/// natural key is missing.
pub fn plan_product(payload: ProductPayload) -> Option<UpsertProduct> {
    let product_code = payload.product_code.filter(|code| !code.is_empty())?;
    Some(UpsertProduct {
        product_code,
        name: payload.name,
        category: payload.category,
        status: payload.status,
        description: payload.description,
        db_name: payload.db_name,
        total_features: payload.total_features,
        upstream_updated_at: payload.updated_at,
    })
}

/// Plan a product batch, counting keyless items as skipped.
pub fn plan_products(items: Vec<ProductPayload>) -> (Vec<UpsertProduct>, usize) {
    let total = items.len();
    let plans: Vec<_> = items.into_iter().filter_map(plan_product).collect();
    let skipped = total - plans.len();
    (plans, skipped)
}

/// Convert one upstream feature into a mirror write, or `None` when the
/// upstream id (natural key half) is missing.
pub fn plan_feature(product_code: &str, payload: FeaturePayload) -> Option<UpsertFeature> {
    let external_id = payload.id?;
    Some(UpsertFeature {
        product_code: product_code.to_string(),
        external_id,
        feature_code: payload.feature_code,
        name: payload.name,
        module_name: payload.module_name,
        item_type: payload.item_type,
        parent_external_id: payload.parent_id,
        is_active: payload.is_active,
        sort_order: payload.sort_order,
        price_addon: payload.price_addon,
        is_trial: payload.is_trial,
        trial_days: payload.trial_days,
    })
}

/// Plan a feature batch, counting keyless items as skipped.
pub fn plan_features(product_code: &str, items: Vec<FeaturePayload>) -> (Vec<UpsertFeature>, usize) {
    let total = items.len();
    let plans: Vec<_> = items
        .into_iter()
        .filter_map(|item| plan_feature(product_code, item))
        .collect();
    let skipped = total - plans.len();
    (plans, skipped)
}

/// Convert one upstream menu into a mirror write, or `None` when the
/// upstream id is missing.
pub fn plan_menu(product_code: &str, payload: MenuPayload) -> Option<UpsertMenu> {
    let external_id = payload.id?;
    Some(UpsertMenu {
        product_code: product_code.to_string(),
        external_id,
        parent_external_id: payload.parent_id,
        title: payload.title,
        icon: payload.icon,
        route_path: payload.route_path,
        menu_type: payload.menu_type,
        sort_order: payload.sort_order,
        is_active: payload.is_active,
    })
}

/// Plan a menu batch, counting keyless items as skipped.
pub fn plan_menus(product_code: &str, items: Vec<MenuPayload>) -> (Vec<UpsertMenu>, usize) {
    let total = items.len();
    let plans: Vec<_> = items
        .into_iter()
        .filter_map(|item| plan_menu(product_code, item))
        .collect();
    let skipped = total - plans.len();
    (plans, skipped)
}
