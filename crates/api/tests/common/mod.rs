use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use backoffice_api::config::ServerConfig;
use backoffice_api::router::build_app_router;
use backoffice_api::state::AppState;
use backoffice_warehouse::{CatalogSyncEngine, WarehouseClient, WarehouseConfig};

/// Build a test `ServerConfig` with safe defaults.
///
/// The warehouse base URL points at a closed local port so any test
/// that accidentally triggers an outbound sync fails fast instead of
/// hanging.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        warehouse: WarehouseConfig::new("http://127.0.0.1:9", "test-secret")
            .with_timeout(Duration::from_secs(1)),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let client = WarehouseClient::new(config.warehouse.clone()).unwrap();
    let sync_engine = Arc::new(CatalogSyncEngine::new(pool.clone(), client));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sync_engine,
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request carrying the trusted identity headers the
/// gateway would normally attach.
pub async fn get_as_level(app: Router, uri: &str, level_id: i64) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header("x-subject-id", "1")
            .header("x-level-id", level_id.to_string())
            .header("x-level-name", "tester")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with an empty body.
pub async fn post(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect the response body into a JSON value.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
