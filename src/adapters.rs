//! File- and terminal-backed implementations of the data service
//! boundaries, used when the CLI runs without a backend.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;
use foldernav_entity::folder::{FolderNode, FolderRecord, FolderTree};
use foldernav_entity::moves::MoveRequest;
use foldernav_service::traits::{FolderTreeSource, MoveSink};

use crate::output;

/// Reads a folder tree snapshot from a JSON file.
///
/// The file holds either nested folders (`[{id, name, children: [...]}]`)
/// or, with `flat` set, parent-linked rows (`[{id, name, parent_id}]`).
#[derive(Debug, Clone)]
pub struct JsonFileTreeSource {
    path: PathBuf,
    flat: bool,
}

impl JsonFileTreeSource {
    /// Creates a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>, flat: bool) -> Self {
        Self {
            path: path.into(),
            flat,
        }
    }

    /// Loads and validates the snapshot.
    pub async fn load(&self) -> AppResult<FolderTree> {
        FolderTree::new(self.fetch_folder_tree().await?)
    }
}

#[async_trait]
impl FolderTreeSource for JsonFileTreeSource {
    async fn fetch_folder_tree(&self) -> AppResult<Vec<FolderNode>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::with_source(
                foldernav_core::error::ErrorKind::ExternalService,
                format!("Failed to read tree file '{}': {e}", self.path.display()),
                e,
            )
        })?;

        let roots: Vec<FolderNode> = if self.flat {
            let records: Vec<FolderRecord> = serde_json::from_str(&raw)?;
            FolderTree::from_records(records)?.into()
        } else {
            serde_json::from_str::<Vec<FolderNode>>(&raw)?
        };

        debug!(path = %self.path.display(), top_level = roots.len(), "Folder tree loaded");
        Ok(roots)
    }
}

/// Prints confirmed moves as JSON instead of applying them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutMoveSink;

#[async_trait]
impl MoveSink for StdoutMoveSink {
    async fn apply_move(&self, request: &MoveRequest) -> AppResult<()> {
        output::print_json(request);
        Ok(())
    }
}
