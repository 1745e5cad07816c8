//! Move session state machine.
//!
//! ```text
//! Closed --open--> Open --confirm--> Confirmed --> Closed
//!                       --cancel---> Cancelled --> Closed
//! ```
//!
//! The session owns everything transient about one destination-picking
//! interaction: the tree snapshot, the candidate destination, and the
//! expansion state. Nothing is shared between sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use foldernav_core::config::AppConfig;
use foldernav_core::config::navigation::DefaultExpansion;
use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;
use foldernav_core::types::FolderId;
use foldernav_entity::folder::FolderTree;
use foldernav_entity::moves::{MoveItem, MoveRequest};

use super::rows::{FolderRow, visible_rows};
use super::validator::{MoveValidator, RenderHint};
use crate::navigation::ExpansionState;

/// Whether the session currently accepts operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No interaction in progress.
    Closed,
    /// The user is picking a destination.
    Open,
}

/// How the last interaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// A destination was emitted.
    Confirmed,
    /// The user backed out; nothing was emitted.
    Cancelled,
}

/// Result of clicking a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The destination became the candidate.
    Selected,
    /// The destination is disabled or unknown; nothing changed.
    Rejected,
}

/// Behaviour switches taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Expansion applied on open.
    pub default_expansion: DefaultExpansion,
    /// Refuse to confirm without an explicit pick.
    pub require_explicit_destination: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_expansion: DefaultExpansion::Ancestors,
            require_explicit_destination: false,
        }
    }
}

impl From<&AppConfig> for SessionSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            default_expansion: config.navigation.default_expansion,
            require_explicit_destination: config.moves.require_explicit_destination,
        }
    }
}

#[derive(Debug, Clone)]
struct OpenState {
    tree: FolderTree,
    source: Option<FolderId>,
    items: Vec<MoveItem>,
    candidate: Option<FolderId>,
    explicitly_chosen: bool,
    expansion: ExpansionState,
    opened_at: DateTime<Utc>,
}

impl OpenState {
    fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(&self.tree, self.source, &self.items)
    }
}

/// One bounded destination-picking interaction for a batch of items.
#[derive(Debug, Clone, Default)]
pub struct MoveSession {
    settings: SessionSettings,
    state: Option<OpenState>,
    last_outcome: Option<SessionOutcome>,
}

impl MoveSession {
    /// Creates a closed session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a closed session with explicit settings.
    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            settings,
            state: None,
            last_outcome: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        if self.state.is_some() {
            SessionPhase::Open
        } else {
            SessionPhase::Closed
        }
    }

    /// How the most recent interaction ended, if it has.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.last_outcome
    }

    /// Opens the session for `items` currently located in `source`.
    ///
    /// Resets the candidate to the root and the expansion state to the
    /// configured default, which reveals the source folder.
    pub fn open(
        &mut self,
        tree: FolderTree,
        source: Option<FolderId>,
        items: Vec<MoveItem>,
    ) -> AppResult<()> {
        if self.state.is_some() {
            return Err(AppError::illegal_transition(
                "Cannot open a move session that is already open",
            ));
        }

        if items.is_empty() {
            return Err(AppError::validation("A move needs at least one item"));
        }

        for folder in items.iter().filter_map(MoveItem::as_folder) {
            if !tree.contains(folder) {
                warn!(folder_id = %folder, "Moved folder missing from tree snapshot");
                return Err(AppError::stale_reference(format!(
                    "Folder {folder} is no longer in the tree"
                )));
            }

            // The source is always selectable, so it cannot lie in a blocked subtree.
            if source.is_some_and(|id| id == folder || tree.is_descendant_of(id, folder)) {
                return Err(AppError::validation(format!(
                    "Folder {folder} cannot be moved out of its own subtree"
                )));
            }
        }

        let mut expansion = ExpansionState::new();
        if let Some(source_id) = source {
            let path = tree.find_path(source_id).ok_or_else(|| {
                warn!(folder_id = %source_id, "Source folder missing from tree snapshot");
                AppError::stale_reference(format!(
                    "Source folder {source_id} is no longer in the tree"
                ))
            })?;

            if self.settings.default_expansion == DefaultExpansion::Ancestors {
                expansion.expand_path(path);
            }
        }

        info!(
            source = ?source,
            item_count = items.len(),
            folder_count = tree.len(),
            "Move session opened"
        );

        self.state = Some(OpenState {
            tree,
            source,
            items,
            candidate: None,
            explicitly_chosen: false,
            expansion,
            opened_at: Utc::now(),
        });
        self.last_outcome = None;

        Ok(())
    }

    /// Picks a candidate destination (`None` for the root).
    ///
    /// Disabled or unknown destinations are ignored and leave the session
    /// untouched.
    pub fn select_candidate(&mut self, destination: Option<FolderId>) -> AppResult<SelectionOutcome> {
        let state = self.open_state_mut("select a destination")?;

        if !state.validator().is_selectable(destination) {
            debug!(destination = ?destination, "Destination rejected");
            return Ok(SelectionOutcome::Rejected);
        }

        state.candidate = destination;
        state.explicitly_chosen = true;
        debug!(destination = ?destination, "Destination selected");
        Ok(SelectionOutcome::Selected)
    }

    /// Flips a folder's expansion. Does not touch the candidate.
    pub fn toggle_expand(&mut self, id: FolderId) -> AppResult<bool> {
        let state = self.open_state_mut("toggle a folder")?;
        Ok(state.expansion.toggle(id))
    }

    /// Emits the candidate destination and closes the session.
    ///
    /// Without any prior selection the destination is the root, unless the
    /// session requires an explicit pick.
    pub fn confirm(&mut self) -> AppResult<MoveRequest> {
        let require_explicit = self.settings.require_explicit_destination;
        let state = self.open_state_mut("confirm")?;

        if require_explicit && !state.explicitly_chosen {
            return Err(AppError::validation(
                "Pick a destination before confirming the move",
            ));
        }

        let request = MoveRequest {
            items: std::mem::take(&mut state.items),
            destination: state.candidate,
            source: state.source,
            requested_at: Utc::now(),
        };

        let held_for = request.requested_at - state.opened_at;
        self.state = None;
        self.last_outcome = Some(SessionOutcome::Confirmed);

        info!(
            destination = ?request.destination,
            item_count = request.items.len(),
            noop = request.is_noop(),
            open_ms = held_for.num_milliseconds(),
            "Move session confirmed"
        );

        Ok(request)
    }

    /// Closes the session without emitting anything.
    pub fn cancel(&mut self) -> AppResult<()> {
        self.open_state("cancel")?;
        self.state = None;
        self.last_outcome = Some(SessionOutcome::Cancelled);
        info!("Move session cancelled");
        Ok(())
    }

    /// The candidate destination (`None` for the root).
    pub fn candidate(&self) -> AppResult<Option<FolderId>> {
        Ok(self.open_state("read the candidate")?.candidate)
    }

    /// Folder the items live in.
    pub fn source(&self) -> AppResult<Option<FolderId>> {
        Ok(self.open_state("read the source")?.source)
    }

    /// Items being moved.
    pub fn items(&self) -> AppResult<&[MoveItem]> {
        Ok(self.open_state("read the items")?.items.as_slice())
    }

    /// The snapshot the session was opened with.
    pub fn tree(&self) -> AppResult<&FolderTree> {
        Ok(&self.open_state("read the tree")?.tree)
    }

    /// Whether a folder is expanded in this session.
    pub fn is_expanded(&self, id: FolderId) -> AppResult<bool> {
        Ok(self.open_state("read expansion")?.expansion.is_expanded(id))
    }

    /// Render hint for the root entry.
    pub fn root_hint(&self) -> AppResult<RenderHint> {
        Ok(self.open_state("render the root")?.validator().root_hint())
    }

    /// Render hint for one destination; `None` for unknown folders.
    pub fn hint(&self, destination: Option<FolderId>) -> AppResult<Option<RenderHint>> {
        Ok(self
            .open_state("render a destination")?
            .validator()
            .hint(destination))
    }

    /// Visible picker rows.
    pub fn rows(&self) -> AppResult<Vec<FolderRow>> {
        let state = self.open_state("render the picker")?;
        Ok(visible_rows(
            &state.tree,
            &state.expansion,
            &state.validator(),
            state.candidate,
        ))
    }

    fn open_state(&self, op: &str) -> AppResult<&OpenState> {
        self.state
            .as_ref()
            .ok_or_else(|| AppError::illegal_transition(format!("Cannot {op}: session is closed")))
    }

    fn open_state_mut(&mut self, op: &str) -> AppResult<&mut OpenState> {
        self.state
            .as_mut()
            .ok_or_else(|| AppError::illegal_transition(format!("Cannot {op}: session is closed")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldernav_core::error::ErrorKind;
    use foldernav_core::types::ReportId;
    use foldernav_entity::folder::FolderNode;

    struct Fixture {
        tree: FolderTree,
        a: FolderId,
        a1: FolderId,
        b: FolderId,
    }

    /// Root -> [A -> [A1], B]
    fn fixture() -> Fixture {
        let (a, a1, b) = (FolderId::new(), FolderId::new(), FolderId::new());
        let tree = FolderTree::new(vec![
            FolderNode::new(a, "A").with_child(FolderNode::new(a1, "A1")),
            FolderNode::new(b, "B"),
        ])
        .unwrap();
        Fixture { tree, a, a1, b }
    }

    fn one_report() -> Vec<MoveItem> {
        vec![MoveItem::Report(ReportId::new())]
    }

    #[test]
    fn test_open_expands_source_chain() {
        let f = fixture();
        let mut session = MoveSession::new();
        session.open(f.tree.clone(), Some(f.a1), one_report()).unwrap();

        assert_eq!(session.phase(), SessionPhase::Open);
        assert!(session.is_expanded(f.a).unwrap());
        assert!(session.is_expanded(f.a1).unwrap());
        assert!(!session.is_expanded(f.b).unwrap());
        assert_eq!(session.candidate().unwrap(), None);
    }

    #[test]
    fn test_open_without_default_expansion() {
        let f = fixture();
        let mut session = MoveSession::with_settings(SessionSettings {
            default_expansion: DefaultExpansion::None,
            require_explicit_destination: false,
        });
        session.open(f.tree, Some(f.a), one_report()).unwrap();
        assert!(!session.is_expanded(f.a).unwrap());
    }

    #[test]
    fn test_open_rejects_stale_source_and_empty_batch() {
        let f = fixture();
        let mut session = MoveSession::new();

        let err = session
            .open(f.tree.clone(), Some(FolderId::new()), one_report())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::StaleReference);
        assert_eq!(session.phase(), SessionPhase::Closed);

        let err = session.open(f.tree, None, Vec::new()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_open_twice_is_illegal() {
        let f = fixture();
        let mut session = MoveSession::new();
        session.open(f.tree.clone(), None, one_report()).unwrap();
        let err = session.open(f.tree, None, one_report()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::IllegalTransition);
    }

    #[test]
    fn test_toggle_does_not_touch_candidate() {
        let f = fixture();
        let mut session = MoveSession::new();
        session.open(f.tree, Some(f.a), one_report()).unwrap();
        session.select_candidate(Some(f.b)).unwrap();

        assert!(!session.toggle_expand(f.a).unwrap());
        assert!(session.toggle_expand(f.a).unwrap());
        assert_eq!(session.candidate().unwrap(), Some(f.b));
    }

    #[test]
    fn test_rejected_selection_leaves_state() {
        let f = fixture();
        let mut session = MoveSession::new();
        session
            .open(f.tree, None, vec![MoveItem::Folder(f.a)])
            .unwrap();
        session.select_candidate(Some(f.b)).unwrap();

        assert_eq!(
            session.select_candidate(Some(f.a1)).unwrap(),
            SelectionOutcome::Rejected
        );
        assert_eq!(
            session.select_candidate(Some(FolderId::new())).unwrap(),
            SelectionOutcome::Rejected
        );
        assert_eq!(session.candidate().unwrap(), Some(f.b));
    }

    #[test]
    fn test_open_rejects_source_inside_moved_folder() {
        let f = fixture();
        let mut session = MoveSession::new();

        let err = session
            .open(f.tree.clone(), Some(f.a1), vec![MoveItem::Folder(f.a)])
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(session.phase(), SessionPhase::Closed);

        let err = session
            .open(f.tree.clone(), Some(f.a), vec![MoveItem::Folder(f.a)])
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(session.phase(), SessionPhase::Closed);

        // A1 moved out of A: A stays the current folder and A1 is disabled.
        session
            .open(f.tree, Some(f.a), vec![MoveItem::Folder(f.a1)])
            .unwrap();
        assert!(session.hint(Some(f.a)).unwrap().unwrap().current);
        assert_eq!(
            session.select_candidate(Some(f.a1)).unwrap(),
            SelectionOutcome::Rejected
        );
    }

    #[test]
    fn test_open_rejects_stale_moved_folder() {
        let f = fixture();
        let mut session = MoveSession::new();
        let err = session
            .open(f.tree, None, vec![MoveItem::Folder(FolderId::new())])
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::StaleReference);
        assert_eq!(session.phase(), SessionPhase::Closed);
    }

    #[test]
    fn test_closed_session_refuses_everything() {
        let f = fixture();
        let mut session = MoveSession::new();
        assert_eq!(
            session.confirm().unwrap_err().kind,
            ErrorKind::IllegalTransition
        );

        session.open(f.tree, Some(f.a), one_report()).unwrap();
        session.cancel().unwrap();
        assert_eq!(session.outcome(), Some(SessionOutcome::Cancelled));

        for err in [
            session.select_candidate(None).unwrap_err(),
            session.toggle_expand(f.a).unwrap_err(),
            session.cancel().unwrap_err(),
            session.confirm().unwrap_err(),
            session.rows().unwrap_err(),
        ] {
            assert_eq!(err.kind, ErrorKind::IllegalTransition);
        }
    }

    #[test]
    fn test_require_explicit_destination() {
        let f = fixture();
        let mut session = MoveSession::with_settings(SessionSettings {
            default_expansion: DefaultExpansion::Ancestors,
            require_explicit_destination: true,
        });
        session.open(f.tree, Some(f.a), one_report()).unwrap();

        assert_eq!(session.confirm().unwrap_err().kind, ErrorKind::Validation);
        assert_eq!(session.phase(), SessionPhase::Open);

        session.select_candidate(None).unwrap();
        let request = session.confirm().unwrap();
        assert_eq!(request.destination, None);
        assert_eq!(session.outcome(), Some(SessionOutcome::Confirmed));
    }
}
