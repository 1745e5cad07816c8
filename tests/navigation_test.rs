//! Breadcrumb, expansion, and picker rendering across a whole tree.

mod helpers;

use foldernav_core::types::FolderId;
use foldernav_entity::folder::{FolderNode, FolderTree};
use foldernav_service::moves::{MoveSession, MoveValidator, visible_rows};
use foldernav_service::navigation::{BreadcrumbPath, ExpansionState, FolderNavigator};

use helpers::SampleTree;

fn deep_tree() -> FolderTree {
    let leaf = |name: &str| FolderNode::new(FolderId::new(), name);
    FolderTree::new(vec![
        leaf("Finance")
            .with_child(leaf("2024").with_child(leaf("Q1")).with_child(leaf("Q2")))
            .with_child(leaf("2025")),
        leaf("HR").with_child(leaf("Payroll")),
        leaf("Archive"),
    ])
    .unwrap()
}

#[test]
fn test_breadcrumb_ends_at_folder_and_starts_at_top_level() {
    let tree = deep_tree();
    for (depth, node) in tree.iter() {
        let trail = BreadcrumbPath::resolve(&tree, Some(node.id)).unwrap();
        assert_eq!(trail.len(), depth + 1);
        assert_eq!(trail.last().map(|c| c.id), Some(node.id));

        let top = trail.first().map(|c| c.id).unwrap();
        assert!(tree.roots().iter().any(|root| root.id == top));
    }
}

#[test]
fn test_root_breadcrumb_is_empty() {
    let tree = deep_tree();
    assert!(BreadcrumbPath::resolve(&tree, None).unwrap().is_empty());
}

#[test]
fn test_navigator_surfaces_stale_folder() {
    let sample = SampleTree::new();
    let mut navigator = FolderNavigator::new();
    navigator.navigate_to(sample.a1);

    // A newer snapshot without A1.
    let refreshed = FolderTree::new(vec![FolderNode::new(sample.b, "B")]).unwrap();
    assert!(navigator.breadcrumbs(&sample.tree()).is_ok());
    assert!(navigator.breadcrumbs(&refreshed).unwrap_err().is_stale());
}

#[test]
fn test_toggle_twice_for_every_folder() {
    let tree = deep_tree();
    let mut state = ExpansionState::new();
    state.expand_path(tree.find_path(tree.roots()[0].id).unwrap());
    let before = state.clone();

    for (_, node) in tree.iter() {
        state.toggle(node.id);
        state.toggle(node.id);
    }
    assert_eq!(state, before);
}

#[test]
fn test_validator_marks_only_source_current() {
    let tree = deep_tree();
    let items = helpers::reports(3);
    for (_, source) in tree.iter() {
        let validator = MoveValidator::new(&tree, Some(source.id), &items);
        let hints = validator.hints();
        assert!(hints.iter().all(|(_, h)| !h.disabled));
        let current: Vec<FolderId> = hints
            .iter()
            .filter(|(_, h)| h.current)
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(current, vec![source.id]);
        assert!(!validator.root_hint().disabled && !validator.root_hint().current);
    }
}

#[test]
fn test_session_rows_follow_toggles() {
    let sample = SampleTree::new();
    let mut session = MoveSession::new();
    session
        .open(sample.tree(), Some(sample.a1), helpers::reports(1))
        .unwrap();

    let names: Vec<String> = session.rows().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["A", "A1", "B"]);

    session.toggle_expand(sample.a).unwrap();
    let names: Vec<String> = session.rows().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_rows_for_fresh_expansion_show_top_level_only() {
    let tree = deep_tree();
    let items = helpers::reports(1);
    let validator = MoveValidator::new(&tree, None, &items);
    let rows = visible_rows(&tree, &ExpansionState::new(), &validator, None);
    assert_eq!(rows.len(), tree.roots().len());
    assert!(rows.iter().all(|r| r.depth == 0));
}
