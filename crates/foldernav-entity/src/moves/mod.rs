//! Move request models handed to the data service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use foldernav_core::types::{FolderId, ReportId};

/// One item in a batch move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum MoveItem {
    /// A report document.
    Report(ReportId),
    /// A whole folder, together with everything below it.
    Folder(FolderId),
}

impl MoveItem {
    /// The folder id, if this item is a folder.
    pub fn as_folder(&self) -> Option<FolderId> {
        match self {
            Self::Folder(id) => Some(*id),
            Self::Report(_) => None,
        }
    }
}

/// The confirmed outcome of a move session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Items to move.
    pub items: Vec<MoveItem>,
    /// Destination folder (`None` for the root level).
    pub destination: Option<FolderId>,
    /// Folder the items were in when the session opened (`None` for root).
    pub source: Option<FolderId>,
    /// When the move was confirmed.
    pub requested_at: DateTime<Utc>,
}

impl MoveRequest {
    /// Whether the destination is the folder the items already live in.
    pub fn is_noop(&self) -> bool {
        self.destination == self.source
    }

    /// Number of items in the batch.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
