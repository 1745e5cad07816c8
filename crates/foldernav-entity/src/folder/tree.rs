//! Folder tree snapshot and the structural queries run against it.
//!
//! A [`FolderTree`] is the ordered list of top-level folders below the
//! virtual root. The root itself has no node and no id. Every traversal is
//! a single depth-first pre-order walk over an explicit stack, so sibling
//! order is preserved and no query revisits a node.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;
use foldernav_core::types::FolderId;

use super::model::{FolderNode, FolderRecord};

/// An immutable snapshot of the folder hierarchy.
///
/// Construction validates that every id appears exactly once, so the
/// structure is a tree and lookups by id are unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FolderNode>", into = "Vec<FolderNode>")]
pub struct FolderTree {
    /// Top-level folders, in display order.
    roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    len: usize,
}

impl FolderTree {
    /// Create a tree from its top-level folders.
    ///
    /// Fails with a validation error if any folder id appears twice.
    pub fn new(roots: Vec<FolderNode>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for (_, node) in Iter::new(&roots) {
            if !seen.insert(node.id) {
                return Err(AppError::validation(format!(
                    "Folder id {} appears more than once in the tree",
                    node.id
                )));
            }
        }

        Ok(Self {
            len: seen.len(),
            roots,
        })
    }

    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            len: 0,
        }
    }

    /// Builds a tree from flat parent-linked records.
    ///
    /// Siblings keep the order in which they appear in `records`. A record
    /// pointing at an unknown parent, or one that cannot be reached from a
    /// top-level folder (a parent cycle), is rejected.
    pub fn from_records(records: Vec<FolderRecord>) -> AppResult<Self> {
        let mut known = HashSet::with_capacity(records.len());
        for record in &records {
            if !known.insert(record.id) {
                return Err(AppError::validation(format!(
                    "Folder id {} appears more than once in the records",
                    record.id
                )));
            }
        }

        let mut children_of: HashMap<Option<FolderId>, Vec<&FolderRecord>> = HashMap::new();
        for record in &records {
            if let Some(parent_id) = record.parent_id {
                if !known.contains(&parent_id) {
                    return Err(AppError::validation(format!(
                        "Folder {} references unknown parent {}",
                        record.id, parent_id
                    )));
                }
            }
            children_of.entry(record.parent_id).or_default().push(record);
        }

        let roots: Vec<FolderNode> = children_of
            .get(&None)
            .map(|top| {
                top.iter()
                    .map(|record| build_node(record, &children_of))
                    .collect()
            })
            .unwrap_or_default();

        let tree = Self::new(roots)?;
        if tree.len != records.len() {
            return Err(AppError::validation(format!(
                "{} folder(s) are unreachable from the top level (parent cycle)",
                records.len() - tree.len
            )));
        }

        Ok(tree)
    }

    /// Top-level folders, in display order.
    pub fn roots(&self) -> &[FolderNode] {
        &self.roots
    }

    /// Total number of folders.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no folders at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Depth-first pre-order walk yielding `(depth, node)`, depth 0 for
    /// top-level folders.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.roots)
    }

    /// Finds a folder by id.
    pub fn find(&self, id: FolderId) -> Option<&FolderNode> {
        self.iter().map(|(_, node)| node).find(|node| node.id == id)
    }

    /// Whether a folder with this id exists in the snapshot.
    pub fn contains(&self, id: FolderId) -> bool {
        self.find(id).is_some()
    }

    /// The chain of folders from the top level down to `target`, inclusive.
    ///
    /// Returns `None` when `target` is not in the tree.
    pub fn ancestry(&self, target: FolderId) -> Option<Vec<&FolderNode>> {
        let mut path: Vec<&FolderNode> = Vec::new();
        for (depth, node) in self.iter() {
            path.truncate(depth);
            path.push(node);
            if node.id == target {
                return Some(path);
            }
        }
        None
    }

    /// Ids from the top level down to `target`, inclusive.
    ///
    /// Returns `None` when `target` is not in the tree.
    pub fn find_path(&self, target: FolderId) -> Option<Vec<FolderId>> {
        self.ancestry(target)
            .map(|chain| chain.into_iter().map(|node| node.id).collect())
    }

    /// Whether `candidate` lies strictly inside the subtree of `ancestor`.
    ///
    /// A folder is not its own descendant. Absent ids have no relationship.
    pub fn is_descendant_of(&self, candidate: FolderId, ancestor: FolderId) -> bool {
        match self.find(ancestor) {
            Some(node) => Iter::new(&node.children).any(|(_, n)| n.id == candidate),
            None => false,
        }
    }

    /// Ids of every folder strictly below `id`. Empty if `id` is absent.
    pub fn descendant_ids(&self, id: FolderId) -> Vec<FolderId> {
        self.find(id)
            .map(|node| Iter::new(&node.children).map(|(_, n)| n.id).collect())
            .unwrap_or_default()
    }

    /// Display path of a folder, e.g. `"Finance / Q1"`.
    pub fn full_path(&self, id: FolderId, separator: &str) -> Option<String> {
        self.ancestry(id).map(|chain| {
            chain
                .iter()
                .map(|node| node.name.as_str())
                .collect::<Vec<_>>()
                .join(separator)
        })
    }
}

impl Default for FolderTree {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<FolderNode>> for FolderTree {
    type Error = AppError;

    fn try_from(roots: Vec<FolderNode>) -> Result<Self, Self::Error> {
        Self::new(roots)
    }
}

impl From<FolderTree> for Vec<FolderNode> {
    fn from(tree: FolderTree) -> Self {
        tree.roots
    }
}

fn build_node(
    record: &FolderRecord,
    children_of: &HashMap<Option<FolderId>, Vec<&FolderRecord>>,
) -> FolderNode {
    let children = children_of
        .get(&Some(record.id))
        .map(|kids| kids.iter().map(|kid| build_node(kid, children_of)).collect())
        .unwrap_or_default();

    FolderNode {
        id: record.id,
        name: record.name.clone(),
        report_count: record.report_count,
        reports: Vec::new(),
        children,
    }
}

/// Pre-order iterator over a forest of folders.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<(usize, &'a FolderNode)>,
}

impl<'a> Iter<'a> {
    fn new(nodes: &'a [FolderNode]) -> Self {
        Self {
            stack: nodes.iter().rev().map(|node| (0, node)).collect(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a FolderNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
