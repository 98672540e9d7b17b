//! HTTP-level integration tests for the permission-pruned navigation
//! menu and the trusted-identity extractor.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_as_level};
use sqlx::PgPool;

use backoffice_db::models::nav_item::CreateNavItem;
use backoffice_db::models::permission::CreateGrant;
use backoffice_db::repositories::{NavItemRepo, PermissionRepo};

async fn seed_nav(pool: &PgPool, slug: &str, parent_id: Option<i64>, sort_order: i32) -> i64 {
    NavItemRepo::create(
        pool,
        &CreateNavItem {
            slug: slug.to_string(),
            label: slug.to_uppercase(),
            icon: None,
            parent_id,
            sort_order: Some(sort_order),
            is_active: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn grant_access(pool: &PgPool, level_id: i64, nav_item_id: i64) {
    PermissionRepo::create(
        pool,
        &CreateGrant {
            level_id,
            nav_item_id,
            can_access: true,
            can_view: true,
            ..CreateGrant::default()
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn menu_requires_identity_headers(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/navigation/menu").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn menu_is_pruned_for_the_caller_level(pool: PgPool) {
    let root = seed_nav(&pool, "admin", None, 0).await;
    let child = seed_nav(&pool, "catalog", Some(root), 0).await;
    let leaf = seed_nav(&pool, "products", Some(child), 0).await;
    seed_nav(&pool, "finance", None, 1).await;
    grant_access(&pool, 7, leaf).await;

    let app = common::build_test_app(pool);
    let response = get_as_level(app, "/api/v1/navigation/menu", 7).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let forest = json["data"].as_array().unwrap();

    // Only the scaffolding chain above the allowed leaf survives.
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0]["slug"], "admin");
    assert_eq!(forest[0]["allowed"], false);
    let child_node = &forest[0]["children"][0];
    assert_eq!(child_node["slug"], "catalog");
    assert_eq!(child_node["allowed"], false);
    let leaf_node = &child_node["children"][0];
    assert_eq!(leaf_node["slug"], "products");
    assert_eq!(leaf_node["allowed"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn different_levels_see_different_menus(pool: PgPool) {
    let home = seed_nav(&pool, "home", None, 0).await;
    let admin = seed_nav(&pool, "admin", None, 1).await;
    grant_access(&pool, 1, home).await;
    grant_access(&pool, 1, admin).await;
    grant_access(&pool, 2, home).await;

    let full = body_json(
        get_as_level(common::build_test_app(pool.clone()), "/api/v1/navigation/menu", 1).await,
    )
    .await;
    assert_eq!(full["data"].as_array().unwrap().len(), 2);

    let limited = body_json(
        get_as_level(common::build_test_app(pool), "/api/v1/navigation/menu", 2).await,
    )
    .await;
    let forest = limited["data"].as_array().unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0]["slug"], "home");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn level_with_no_grants_gets_empty_forest(pool: PgPool) {
    seed_nav(&pool, "home", None, 0).await;

    let app = common::build_test_app(pool);
    let response = get_as_level(app, "/api/v1/navigation/menu", 99).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
