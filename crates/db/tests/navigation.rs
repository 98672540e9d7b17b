//! Integration tests for navigation items and permission grants:
//! loading order, the allowed set, and end-to-end tree pruning over
//! database-loaded rows.

use std::collections::HashSet;

use sqlx::PgPool;

use backoffice_core::navigation::build_allowed_forest;
use backoffice_db::models::nav_item::CreateNavItem;
use backoffice_db::models::permission::CreateGrant;
use backoffice_db::repositories::{NavItemRepo, PermissionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn nav(slug: &str, parent_id: Option<i64>, sort_order: i32) -> CreateNavItem {
    CreateNavItem {
        slug: slug.to_string(),
        label: slug.to_uppercase(),
        icon: None,
        parent_id,
        sort_order: Some(sort_order),
        is_active: None,
    }
}

fn access_grant(level_id: i64, nav_item_id: i64) -> CreateGrant {
    CreateGrant {
        level_id,
        nav_item_id,
        can_access: true,
        can_view: true,
        ..CreateGrant::default()
    }
}

async fn pruned_forest(
    pool: &PgPool,
    level_id: i64,
) -> Vec<backoffice_core::navigation::NavNode> {
    let allowed: HashSet<_> = PermissionRepo::allowed_nav_ids(pool, level_id)
        .await
        .unwrap()
        .into_iter()
        .collect();
    let items = NavItemRepo::list_active(pool).await.unwrap();
    let rows: Vec<_> = items.iter().map(|i| i.nav_row()).collect();
    build_allowed_forest(&rows, &allowed)
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn allowed_set_only_contains_access_grants(pool: PgPool) {
    let item = NavItemRepo::create(&pool, &nav("reports", None, 0)).await.unwrap();
    let viewed = NavItemRepo::create(&pool, &nav("settings", None, 1)).await.unwrap();

    PermissionRepo::create(&pool, &access_grant(7, item.id)).await.unwrap();
    // A grant without access does not put the item in the allowed set.
    PermissionRepo::create(
        &pool,
        &CreateGrant {
            level_id: 7,
            nav_item_id: viewed.id,
            can_view: true,
            ..CreateGrant::default()
        },
    )
    .await
    .unwrap();

    let allowed = PermissionRepo::allowed_nav_ids(&pool, 7).await.unwrap();
    assert_eq!(allowed, vec![item.id]);
}

#[sqlx::test]
async fn duplicate_grant_for_same_pair_is_rejected(pool: PgPool) {
    let item = NavItemRepo::create(&pool, &nav("reports", None, 0)).await.unwrap();
    PermissionRepo::create(&pool, &access_grant(7, item.id)).await.unwrap();

    let err = PermissionRepo::create(&pool, &access_grant(7, item.id)).await.unwrap_err();
    assert!(backoffice_db::is_unique_violation(&err));
}

#[sqlx::test]
async fn grants_are_per_level(pool: PgPool) {
    let item = NavItemRepo::create(&pool, &nav("reports", None, 0)).await.unwrap();
    PermissionRepo::create(&pool, &access_grant(7, item.id)).await.unwrap();

    assert_eq!(PermissionRepo::allowed_nav_ids(&pool, 8).await.unwrap(), Vec::<i64>::new());
    assert_eq!(PermissionRepo::list_for_level(&pool, 7).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Tree pruning over stored rows
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn ancestors_survive_for_allowed_grandchild(pool: PgPool) {
    let root = NavItemRepo::create(&pool, &nav("admin", None, 0)).await.unwrap();
    let child = NavItemRepo::create(&pool, &nav("catalog", Some(root.id), 0))
        .await
        .unwrap();
    let grandchild = NavItemRepo::create(&pool, &nav("products", Some(child.id), 0))
        .await
        .unwrap();
    PermissionRepo::create(&pool, &access_grant(7, grandchild.id)).await.unwrap();

    let forest = pruned_forest(&pool, 7).await;

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].slug, "admin");
    assert!(!forest[0].allowed);
    assert_eq!(forest[0].children[0].slug, "catalog");
    assert!(!forest[0].children[0].allowed);
    assert_eq!(forest[0].children[0].children[0].slug, "products");
    assert!(forest[0].children[0].children[0].allowed);
}

#[sqlx::test]
async fn unallowed_isolated_root_is_pruned(pool: PgPool) {
    let kept = NavItemRepo::create(&pool, &nav("home", None, 0)).await.unwrap();
    let dropped = NavItemRepo::create(&pool, &nav("finance", None, 1)).await.unwrap();
    NavItemRepo::create(&pool, &nav("invoices", Some(dropped.id), 0))
        .await
        .unwrap();
    PermissionRepo::create(&pool, &access_grant(7, kept.id)).await.unwrap();

    let forest = pruned_forest(&pool, 7).await;

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].slug, "home");
}

#[sqlx::test]
async fn inactive_items_never_appear(pool: PgPool) {
    let inactive = NavItemRepo::create(
        &pool,
        &CreateNavItem {
            is_active: Some(false),
            ..nav("hidden", None, 0)
        },
    )
    .await
    .unwrap();
    PermissionRepo::create(&pool, &access_grant(7, inactive.id)).await.unwrap();

    let forest = pruned_forest(&pool, 7).await;
    assert!(forest.is_empty());
}

#[sqlx::test]
async fn root_and_sibling_ordering_follows_sort_order(pool: PgPool) {
    let b = NavItemRepo::create(&pool, &nav("beta", None, 2)).await.unwrap();
    let a = NavItemRepo::create(&pool, &nav("alpha", None, 1)).await.unwrap();
    for item in [&a, &b] {
        PermissionRepo::create(&pool, &access_grant(7, item.id)).await.unwrap();
    }

    let forest = pruned_forest(&pool, 7).await;
    let slugs: Vec<&str> = forest.iter().map(|n| n.slug.as_str()).collect();
    assert_eq!(slugs, vec!["alpha", "beta"]);
}

#[sqlx::test]
async fn duplicate_slug_is_rejected(pool: PgPool) {
    NavItemRepo::create(&pool, &nav("reports", None, 0)).await.unwrap();
    let err = NavItemRepo::create(&pool, &nav("reports", None, 1)).await.unwrap_err();
    assert!(backoffice_db::is_unique_violation(&err));
}
