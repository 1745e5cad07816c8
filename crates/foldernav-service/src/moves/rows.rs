//! Flattened, render-ready view of the destination picker.

use serde::{Deserialize, Serialize};

use foldernav_core::types::FolderId;
use foldernav_entity::folder::{FolderNode, FolderTree};

use super::validator::{MoveValidator, RenderHint};
use crate::navigation::ExpansionState;

/// One visible line of the folder picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRow {
    /// Folder id.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Nesting level, 0 for top-level folders.
    pub depth: usize,
    /// Whether an expand/collapse chevron is shown.
    pub has_children: bool,
    /// Whether the children are currently listed below this row.
    pub expanded: bool,
    /// Reports filed directly in this folder.
    pub report_count: u64,
    /// Selectable/current/disabled state.
    pub hint: RenderHint,
    /// Whether this is the candidate destination.
    pub chosen: bool,
}

/// Lists the rows a user can see: every top-level folder, plus the
/// children of each expanded folder whose ancestors are also expanded.
pub fn visible_rows(
    tree: &FolderTree,
    expansion: &ExpansionState,
    validator: &MoveValidator<'_>,
    candidate: Option<FolderId>,
) -> Vec<FolderRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<(usize, &FolderNode)> =
        tree.roots().iter().rev().map(|node| (0, node)).collect();

    while let Some((depth, node)) = stack.pop() {
        let expanded = expansion.is_expanded(node.id);
        rows.push(FolderRow {
            id: node.id,
            name: node.name.clone(),
            depth,
            has_children: node.has_children(),
            expanded,
            report_count: node.report_count,
            hint: validator.folder_hint(node.id),
            chosen: candidate == Some(node.id),
        });

        if expanded {
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldernav_core::types::ReportId;
    use foldernav_entity::moves::MoveItem;

    #[test]
    fn test_collapsed_children_are_hidden() {
        let (a, a1, a1x, b) = (
            FolderId::new(),
            FolderId::new(),
            FolderId::new(),
            FolderId::new(),
        );
        let tree = FolderTree::new(vec![
            FolderNode::new(a, "A")
                .with_child(FolderNode::new(a1, "A1").with_child(FolderNode::new(a1x, "A1x"))),
            FolderNode::new(b, "B"),
        ])
        .unwrap();
        let items = vec![MoveItem::Report(ReportId::new())];
        let validator = MoveValidator::new(&tree, Some(a), &items);

        let mut expansion = ExpansionState::new();
        let names = |rows: Vec<FolderRow>| -> Vec<String> { rows.into_iter().map(|r| r.name).collect() };

        assert_eq!(
            names(visible_rows(&tree, &expansion, &validator, None)),
            vec!["A", "B"]
        );

        // A1 expanded on its own stays hidden while A is collapsed.
        expansion.toggle(a1);
        assert_eq!(
            names(visible_rows(&tree, &expansion, &validator, None)),
            vec!["A", "B"]
        );

        expansion.toggle(a);
        let rows = visible_rows(&tree, &expansion, &validator, Some(a1x));
        let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 0]);
        assert!(rows[0].hint.current);
        assert!(rows[2].chosen);
        assert!(!rows[3].has_children);
    }
}
