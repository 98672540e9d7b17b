use std::sync::Arc;

use backoffice_warehouse::CatalogSyncEngine;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: backoffice_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalog sync engine targeting the configured warehouse source.
    pub sync_engine: Arc<CatalogSyncEngine>,
}
