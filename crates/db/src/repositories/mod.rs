//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Mirror tables expose an
//! `upsert` keyed by their natural key; authored tables expose reads
//! plus fixture-style inserts.

pub mod entitlement_repo;
pub mod feature_repo;
pub mod menu_repo;
pub mod nav_item_repo;
pub mod package_repo;
pub mod permission_repo;
pub mod product_repo;

pub use entitlement_repo::EntitlementRepo;
pub use feature_repo::FeatureRepo;
pub use menu_repo::MenuRepo;
pub use nav_item_repo::NavItemRepo;
pub use package_repo::PackageRepo;
pub use permission_repo::PermissionRepo;
pub use product_repo::ProductRepo;
