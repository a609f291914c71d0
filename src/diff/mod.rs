mod engine;

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::Serialize;

use crate::path::Jpath;

/// Classification of a path that differs between the two documents.
///
/// Paths that are structurally equal on both sides get no entry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// The set of paths that differ between two documents, keyed by path.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiffMap(BTreeMap<Jpath, ChangeKind>);

impl DiffMap {
    pub fn insert(&mut self, path: Jpath, kind: ChangeKind) {
        self.0.insert(path, kind);
    }

    /// Aggregate counts per change kind, for summary display.
    pub fn summary(&self) -> DiffSummary {
        let count = |kind| self.0.values().filter(|k| **k == kind).count();
        DiffSummary {
            added: count(ChangeKind::Added),
            removed: count(ChangeKind::Removed),
            modified: count(ChangeKind::Modified),
        }
    }

    /// Drops every entry that is not `root` itself or below it.
    pub fn retain_under(&mut self, root: &Jpath) {
        self.0
            .retain(|path, _| path == root || path.is_descendant_of(root));
    }
}

impl Deref for DiffMap {
    type Target = BTreeMap<Jpath, ChangeKind>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Aggregate change counts across one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffSummary {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

/// Structurally compare two documents.
///
/// An absent side classifies the whole subtree as one atomic entry at the
/// current path; arrays are compared by index, objects by key union, and
/// everything else by deep equality.
pub fn diff(left: Option<&serde_json::Value>, right: Option<&serde_json::Value>) -> DiffMap {
    let mut entries = DiffMap::default();
    let mut path_pos = Jpath::root();

    engine::diff_recursive(left, right, &mut path_pos, &mut entries);

    entries
}
