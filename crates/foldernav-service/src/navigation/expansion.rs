//! Per-folder expand/collapse state.

use std::collections::HashSet;

use foldernav_core::types::FolderId;
use foldernav_entity::folder::FolderTree;
use tracing::debug;

/// Tracks which folders are shown expanded, independent of selection.
///
/// Only membership is observable; toggling twice restores the original
/// state and expanding an expanded folder is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<FolderId>,
}

impl ExpansionState {
    /// Creates a fully collapsed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the membership of `id`. Returns whether it is now expanded.
    pub fn toggle(&mut self, id: FolderId) -> bool {
        let expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        debug!(folder_id = %id, expanded, "Folder expansion toggled");
        expanded
    }

    /// Whether `id` is currently expanded.
    pub fn is_expanded(&self, id: FolderId) -> bool {
        self.expanded.contains(&id)
    }

    /// Expands every folder in an ancestor chain.
    pub fn expand_path<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = FolderId>,
    {
        self.expanded.extend(ids);
    }

    /// Collapses everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Drops ids that no longer resolve in `tree`.
    pub fn retain_existing(&mut self, tree: &FolderTree) {
        let live: HashSet<FolderId> = tree.iter().map(|(_, node)| node.id).collect();
        let before = self.expanded.len();
        self.expanded.retain(|id| live.contains(id));
        let pruned = before - self.expanded.len();
        if pruned > 0 {
            debug!(pruned, "Dropped expansion entries for vanished folders");
        }
    }

    /// Number of expanded folders.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
