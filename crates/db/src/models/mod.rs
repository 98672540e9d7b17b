//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Write DTOs where the table is written by this workspace (mirror
//!   upserts for catalog tables, fixture inserts for authored tables)

pub mod entitlement;
pub mod feature;
pub mod menu;
pub mod nav_item;
pub mod package;
pub mod permission;
pub mod product;
