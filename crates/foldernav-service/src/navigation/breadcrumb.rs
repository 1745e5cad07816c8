//! Breadcrumb trail from the top level down to the current folder.

use serde::{Deserialize, Serialize};
use tracing::warn;

use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;
use foldernav_core::types::FolderId;
use foldernav_entity::folder::FolderTree;

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Folder id.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
}

/// Ordered breadcrumb trail, top-level folder first, current folder last.
///
/// The root has no entry of its own; an empty path means "at the root".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreadcrumbPath(Vec<Breadcrumb>);

impl BreadcrumbPath {
    /// Resolves the trail for `current` within `tree`.
    ///
    /// `None` yields the empty path. An id that is not in the snapshot is a
    /// stale reference: the folder was removed after the tree was fetched,
    /// and the caller has to refresh rather than show a partial trail.
    pub fn resolve(tree: &FolderTree, current: Option<FolderId>) -> AppResult<Self> {
        let Some(current) = current else {
            return Ok(Self::default());
        };

        let chain = tree.ancestry(current).ok_or_else(|| {
            warn!(folder_id = %current, "Breadcrumb requested for a folder missing from the tree");
            AppError::stale_reference(format!("Folder {current} is no longer in the tree"))
        })?;

        Ok(Self(
            chain
                .into_iter()
                .map(|node| Breadcrumb {
                    id: node.id,
                    name: node.name.clone(),
                })
                .collect(),
        ))
    }

    /// Entries, top level first.
    pub fn iter(&self) -> std::slice::Iter<'_, Breadcrumb> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root's (empty) trail.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The current folder's entry.
    pub fn last(&self) -> Option<&Breadcrumb> {
        self.0.last()
    }

    /// The top-level ancestor's entry.
    pub fn first(&self) -> Option<&Breadcrumb> {
        self.0.first()
    }

    /// Renders the trail as one line, e.g. `"Finance / Q1"`.
    pub fn display(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|crumb| crumb.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<'a> IntoIterator for &'a BreadcrumbPath {
    type Item = &'a Breadcrumb;
    type IntoIter = std::slice::Iter<'a, Breadcrumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldernav_core::error::ErrorKind;
    use foldernav_entity::folder::FolderNode;

    #[test]
    fn test_root_has_empty_trail() {
        let tree = FolderTree::empty();
        let path = BreadcrumbPath::resolve(&tree, None).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.display(" / "), "");
    }

    #[test]
    fn test_trail_is_top_level_first() {
        let (fin, q1) = (FolderId::new(), FolderId::new());
        let tree = FolderTree::new(vec![
            FolderNode::new(FolderId::new(), "HR"),
            FolderNode::new(fin, "Finance").with_child(FolderNode::new(q1, "Q1")),
        ])
        .unwrap();

        let path = BreadcrumbPath::resolve(&tree, Some(q1)).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.first().map(|c| c.id), Some(fin));
        assert_eq!(path.last().map(|c| c.id), Some(q1));
        assert_eq!(path.display(" > "), "Finance > Q1");
    }

    #[test]
    fn test_missing_folder_is_stale() {
        let tree = FolderTree::new(vec![FolderNode::new(FolderId::new(), "Only")]).unwrap();
        let err = BreadcrumbPath::resolve(&tree, Some(FolderId::new())).unwrap_err();
        assert_eq!(err.kind, ErrorKind::StaleReference);
    }
}
