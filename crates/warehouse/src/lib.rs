//! Client for the external warehouse catalog service plus the sync
//! engine that reconciles its products, features, and menus into the
//! local mirror tables.

pub mod client;
pub mod config;
pub mod payload;
pub mod sync;

pub use client::{WarehouseClient, WarehouseError};
pub use config::WarehouseConfig;
pub use sync::{CatalogSyncEngine, ProductFilter, SyncError, SyncReport};
