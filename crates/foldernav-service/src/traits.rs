//! Boundaries to the external data service.
//!
//! Persistence of folders and reports lives outside this crate. The
//! traits here are the only contact points: one to fetch a tree snapshot,
//! one to request a move.

use async_trait::async_trait;

use foldernav_core::result::AppResult;
use foldernav_entity::folder::FolderNode;
use foldernav_entity::moves::MoveRequest;

/// Supplies the folder tree at the start of an interaction.
#[async_trait]
pub trait FolderTreeSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the top-level folders, each with its full subtree.
    async fn fetch_folder_tree(&self) -> AppResult<Vec<FolderNode>>;
}

/// Applies a confirmed move.
///
/// Implementations own retry policy and user notification; callers
/// invoke this exactly once per confirmed session.
#[async_trait]
pub trait MoveSink: Send + Sync + std::fmt::Debug + 'static {
    /// Move `request.items` into `request.destination`.
    async fn apply_move(&self, request: &MoveRequest) -> AppResult<()>;
}
