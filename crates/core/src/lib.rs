//! Pure domain logic shared across the backoffice workspace.
//!
//! Nothing in this crate touches the database or the network: the
//! entitlement and navigation modules operate on rows the caller has
//! already loaded, which keeps them unit-testable without a Postgres
//! instance.

pub mod entitlement;
pub mod error;
pub mod navigation;
pub mod types;
