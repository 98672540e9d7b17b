//! Permission-pruned navigation forest.
//!
//! Nav items form a self-referential hierarchy (`parent_id` points back
//! into the same table). Given the flat list of active items and the set
//! of item ids a role may access, [`build_allowed_forest`] keeps a node
//! when it is directly allowed or when at least one descendant survived
//! pruning, so an unallowed parent still appears as scaffolding above an
//! allowed leaf.
//!
//! The builder works over an id-based adjacency map rather than nested
//! object references, so a malformed parent chain can never produce a
//! cyclic ownership graph. Input order (the caller sorts by
//! `(parent_id, sort_order)`) is preserved, making the output
//! deterministic for identical input.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::DbId;

/// A flat active nav item as loaded from the store.
#[derive(Debug, Clone)]
pub struct NavRow {
    pub id: DbId,
    pub slug: String,
    pub label: String,
    pub icon: Option<String>,
    pub parent_id: Option<DbId>,
    pub sort_order: i32,
}

/// A kept node in the pruned navigation forest.
///
/// `allowed` reflects the node's own direct grant, independent of
/// whether it survived only because of its descendants.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavNode {
    pub id: DbId,
    pub slug: String,
    pub label: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub allowed: bool,
    pub children: Vec<NavNode>,
}

/// Prune the hierarchy down to nodes the role may see.
///
/// `rows` must contain every active item (not only allowed ones) in
/// `(parent_id, sort_order)` order. Returns the root-level array of kept
/// nodes with nested, pruned children.
pub fn build_allowed_forest(rows: &[NavRow], allowed: &HashSet<DbId>) -> Vec<NavNode> {
    let by_id: HashMap<DbId, &NavRow> = rows.iter().map(|r| (r.id, r)).collect();

    // Parent -> children ids, preserving input order. Roots keyed under None.
    let mut children_of: HashMap<Option<DbId>, Vec<DbId>> = HashMap::new();
    for row in rows {
        // A dangling parent_id (inactive or deleted parent) orphans the
        // subtree rather than promoting it to the root level.
        let key = match row.parent_id {
            Some(pid) if !by_id.contains_key(&pid) => continue,
            other => other,
        };
        children_of.entry(key).or_default().push(row.id);
    }

    prune_level(children_of.get(&None), &by_id, &children_of, allowed)
}

/// Post-order prune of one sibling level: children first, then the
/// keep-or-discard decision for each node.
fn prune_level(
    ids: Option<&Vec<DbId>>,
    by_id: &HashMap<DbId, &NavRow>,
    children_of: &HashMap<Option<DbId>, Vec<DbId>>,
    allowed: &HashSet<DbId>,
) -> Vec<NavNode> {
    let Some(ids) = ids else {
        return Vec::new();
    };

    let mut kept = Vec::new();
    for id in ids {
        let row = by_id[id];
        let children = prune_level(children_of.get(&Some(*id)), by_id, children_of, allowed);
        let directly_allowed = allowed.contains(id);

        if directly_allowed || !children.is_empty() {
            kept.push(NavNode {
                id: row.id,
                slug: row.slug.clone(),
                label: row.label.clone(),
                icon: row.icon.clone(),
                sort_order: row.sort_order,
                allowed: directly_allowed,
                children,
            });
        }
    }
    kept
}
