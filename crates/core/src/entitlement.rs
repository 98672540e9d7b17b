//! Entitlement matrix item kinds and set partitioning.
//!
//! The matrix stores a sparse mapping of (product, package, item) to an
//! enabled flag, where an item is either a catalog menu or a catalog
//! feature. The item kind is a closed enum so resolution logic is
//! exhaustively checked instead of string-matched at every call site.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Kind of catalog item an entitlement matrix row points at.
///
/// Stored in the database as the lowercase strings `"feature"` and
/// `"menu"` (enforced by a CHECK constraint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixItemKind {
    Feature,
    Menu,
}

impl MatrixItemKind {
    /// Database representation of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            MatrixItemKind::Feature => "feature",
            MatrixItemKind::Menu => "menu",
        }
    }

    /// Parse the database representation.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "feature" => Ok(MatrixItemKind::Feature),
            "menu" => Ok(MatrixItemKind::Menu),
            other => Err(CoreError::Internal(format!(
                "Unknown matrix item type '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for MatrixItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matrix row reduced to the fields resolution cares about.
#[derive(Debug, Clone, Copy)]
pub struct MatrixEntry {
    pub kind: MatrixItemKind,
    pub item_id: DbId,
    pub enabled: bool,
}

/// Enabled item ids partitioned by kind, ready for hydration queries.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnabledSets {
    pub menu_ids: Vec<DbId>,
    pub feature_ids: Vec<DbId>,
}

impl EnabledSets {
    pub fn is_empty(&self) -> bool {
        self.menu_ids.is_empty() && self.feature_ids.is_empty()
    }
}

/// Partition matrix rows into enabled menu-id and feature-id sets.
///
/// Rows with `enabled = false` are dropped regardless of the referenced
/// catalog row's own active flag. Input order is preserved within each
/// set, and duplicates are not expected (the table has a uniqueness
/// constraint over the full key).
pub fn partition_enabled(entries: &[MatrixEntry]) -> EnabledSets {
    let mut sets = EnabledSets::default();
    for entry in entries {
        if !entry.enabled {
            continue;
        }
        match entry.kind {
            MatrixItemKind::Menu => sets.menu_ids.push(entry.item_id),
            MatrixItemKind::Feature => sets.feature_ids.push(entry.item_id),
        }
    }
    sets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: MatrixItemKind, item_id: DbId, enabled: bool) -> MatrixEntry {
        MatrixEntry {
            kind,
            item_id,
            enabled,
        }
    }

    #[test]
    fn partition_splits_by_kind() {
        let sets = partition_enabled(&[
            entry(MatrixItemKind::Menu, 1, true),
            entry(MatrixItemKind::Feature, 2, true),
            entry(MatrixItemKind::Menu, 3, true),
        ]);
        assert_eq!(sets.menu_ids, vec![1, 3]);
        assert_eq!(sets.feature_ids, vec![2]);
    }

    #[test]
    fn disabled_rows_are_dropped() {
        let sets = partition_enabled(&[
            entry(MatrixItemKind::Menu, 1, false),
            entry(MatrixItemKind::Feature, 2, false),
            entry(MatrixItemKind::Feature, 3, true),
        ]);
        assert_eq!(sets.menu_ids, Vec::<DbId>::new());
        assert_eq!(sets.feature_ids, vec![3]);
    }

    #[test]
    fn empty_input_yields_empty_sets() {
        let sets = partition_enabled(&[]);
        assert!(sets.is_empty());
    }

    #[test]
    fn kind_round_trips_through_db_string() {
        assert_eq!(
            MatrixItemKind::parse("feature").unwrap(),
            MatrixItemKind::Feature
        );
        assert_eq!(MatrixItemKind::parse("menu").unwrap(), MatrixItemKind::Menu);
        assert_eq!(MatrixItemKind::Feature.as_str(), "feature");
        assert_eq!(MatrixItemKind::Menu.as_str(), "menu");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(MatrixItemKind::parse("widget").is_err());
    }
}
