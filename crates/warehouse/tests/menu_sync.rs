//! Sync-engine behaviour against a live local endpoint.
//!
//! The menu collection is optional upstream: a 404 there means the
//! product has no menus and must resolve to an empty report. The
//! feature collection is not optional, so the same status is a real
//! upstream failure.

use std::time::Duration;

use sqlx::PgPool;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use backoffice_db::models::product::UpsertProduct;
use backoffice_db::repositories::ProductRepo;
use backoffice_warehouse::{
    CatalogSyncEngine, SyncError, SyncReport, WarehouseClient, WarehouseConfig,
};

const NOT_FOUND: &str =
    "HTTP/1.1 404 Not Found\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot found";

/// Serve exactly one canned HTTP response on an ephemeral local port.
async fn serve_one(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{addr}")
}

fn engine(pool: PgPool, base_url: String) -> CatalogSyncEngine {
    let config =
        WarehouseConfig::new(base_url, "test-secret").with_timeout(Duration::from_secs(2));
    CatalogSyncEngine::new(pool, WarehouseClient::new(config).unwrap())
}

async fn seed_product(pool: &PgPool) {
    let input = UpsertProduct {
        product_code: "P1".to_string(),
        name: "Alpha".to_string(),
        category: "ERP".to_string(),
        status: "Active".to_string(),
        description: None,
        db_name: None,
        total_features: 0,
        upstream_updated_at: None,
    };
    ProductRepo::upsert(pool, &input).await.unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn menu_sync_treats_upstream_404_as_no_data(pool: PgPool) {
    seed_product(&pool).await;
    let base_url = serve_one(NOT_FOUND).await;

    let report = engine(pool, base_url).sync_menus("P1").await.unwrap();
    assert_eq!(report, SyncReport { synced: 0, skipped: 0 });
}

#[sqlx::test(migrations = "../db/migrations")]
async fn feature_sync_surfaces_upstream_404_as_an_error(pool: PgPool) {
    seed_product(&pool).await;
    let base_url = serve_one(NOT_FOUND).await;

    let err = engine(pool, base_url).sync_features("P1").await.unwrap_err();
    assert!(matches!(err, SyncError::Upstream(_)));
}
