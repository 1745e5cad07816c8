//! Move destination rules.
//!
//! Rules, in priority order:
//! 1. The root level is always a legal destination. It is flagged as
//!    current when the items already live there.
//! 2. The source folder is flagged as current and stays selectable;
//!    picking it is a no-op move.
//! 3. A folder being moved, and every folder below it, is disabled:
//!    moving a folder into its own subtree would create a cycle.
//! 4. Every other folder in the snapshot is selectable.
//!
//! Ids that are not in the snapshot are never legal destinations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use foldernav_core::types::FolderId;
use foldernav_entity::folder::FolderTree;
use foldernav_entity::moves::MoveItem;

/// How one destination renders in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderHint {
    /// Can be clicked to become the candidate destination.
    pub selectable: bool,
    /// Is where the items currently live (informational badge).
    pub current: bool,
    /// Greyed out and not clickable.
    pub disabled: bool,
}

impl RenderHint {
    fn selectable(current: bool) -> Self {
        Self {
            selectable: true,
            current,
            disabled: false,
        }
    }

    fn disabled() -> Self {
        Self {
            selectable: false,
            current: false,
            disabled: true,
        }
    }
}

/// Decides which destinations a batch of items may be moved to.
#[derive(Debug, Clone)]
pub struct MoveValidator<'a> {
    tree: &'a FolderTree,
    source: Option<FolderId>,
    blocked: HashSet<FolderId>,
}

impl<'a> MoveValidator<'a> {
    /// Creates a validator for `items` currently located in `source`.
    pub fn new(tree: &'a FolderTree, source: Option<FolderId>, items: &[MoveItem]) -> Self {
        let mut blocked = HashSet::new();
        for folder in items.iter().filter_map(MoveItem::as_folder) {
            blocked.insert(folder);
            blocked.extend(tree.descendant_ids(folder));
        }

        Self {
            tree,
            source,
            blocked,
        }
    }

    /// The folder the items currently live in.
    pub fn source(&self) -> Option<FolderId> {
        self.source
    }

    /// Render hint for the virtual root.
    pub fn root_hint(&self) -> RenderHint {
        RenderHint::selectable(self.source.is_none())
    }

    /// Render hint for a destination; `None` means the root.
    ///
    /// Returns `None` when a folder id is not in the snapshot.
    pub fn hint(&self, destination: Option<FolderId>) -> Option<RenderHint> {
        let Some(id) = destination else {
            return Some(self.root_hint());
        };

        if !self.tree.contains(id) {
            return None;
        }

        Some(self.folder_hint(id))
    }

    /// Whether a destination can be picked.
    pub fn is_selectable(&self, destination: Option<FolderId>) -> bool {
        self.hint(destination).is_some_and(|hint| hint.selectable)
    }

    /// Render hints for every folder, in tree order.
    pub fn hints(&self) -> Vec<(FolderId, RenderHint)> {
        self.tree
            .iter()
            .map(|(_, node)| (node.id, self.folder_hint(node.id)))
            .collect()
    }

    /// Hint for a folder already known to be in the tree.
    pub(crate) fn folder_hint(&self, id: FolderId) -> RenderHint {
        if self.source == Some(id) {
            RenderHint::selectable(true)
        } else if self.blocked.contains(&id) {
            RenderHint::disabled()
        } else {
            RenderHint::selectable(false)
        }
    }
}
