//! Current-folder state of the browsing view.

use tracing::debug;

use foldernav_core::result::AppResult;
use foldernav_core::types::FolderId;
use foldernav_entity::folder::FolderTree;

use super::breadcrumb::BreadcrumbPath;

/// Holds which folder the report list is showing.
///
/// Navigating never touches the tree; breadcrumbs are recomputed from the
/// snapshot on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderNavigator {
    current: Option<FolderId>,
}

impl FolderNavigator {
    /// Starts at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The folder currently shown (`None` at the root).
    pub fn current(&self) -> Option<FolderId> {
        self.current
    }

    /// Jumps to a folder, e.g. by clicking a breadcrumb entry.
    pub fn navigate_to(&mut self, id: FolderId) {
        debug!(folder_id = %id, "Navigated to folder");
        self.current = Some(id);
    }

    /// Jumps back to the root ("Home").
    pub fn home(&mut self) {
        debug!("Navigated home");
        self.current = None;
    }

    /// Breadcrumb trail for the current folder.
    pub fn breadcrumbs(&self, tree: &FolderTree) -> AppResult<BreadcrumbPath> {
        BreadcrumbPath::resolve(tree, self.current)
    }
}
