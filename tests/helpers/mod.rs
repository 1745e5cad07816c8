//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use foldernav_core::config::AppConfig;
use foldernav_core::result::AppResult;
use foldernav_core::types::{FolderId, ReportId};
use foldernav_entity::folder::{FolderNode, FolderTree};
use foldernav_entity::moves::{MoveItem, MoveRequest};
use foldernav_service::moves::MoveService;
use foldernav_service::traits::{FolderTreeSource, MoveSink};

/// `Root -> [A -> [A1], B]` with its ids.
pub struct SampleTree {
    /// Top-level folders.
    pub roots: Vec<FolderNode>,
    /// Folder A.
    pub a: FolderId,
    /// Folder A1, child of A.
    pub a1: FolderId,
    /// Folder B.
    pub b: FolderId,
}

impl SampleTree {
    /// Builds a fresh sample tree with random ids.
    pub fn new() -> Self {
        let (a, a1, b) = (FolderId::new(), FolderId::new(), FolderId::new());
        let roots = vec![
            FolderNode::new(a, "A").with_child(FolderNode::new(a1, "A1")),
            FolderNode::new(b, "B"),
        ];
        Self { roots, a, a1, b }
    }

    /// The validated snapshot.
    pub fn tree(&self) -> FolderTree {
        FolderTree::new(self.roots.clone()).expect("sample tree is valid")
    }
}

/// Tree source returning a fixed snapshot.
#[derive(Debug)]
pub struct FixedTreeSource(pub Vec<FolderNode>);

#[async_trait]
impl FolderTreeSource for FixedTreeSource {
    async fn fetch_folder_tree(&self) -> AppResult<Vec<FolderNode>> {
        Ok(self.0.clone())
    }
}

/// Move sink that remembers every request it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<MoveRequest>>,
}

impl RecordingSink {
    /// Requests received so far.
    pub fn calls(&self) -> Vec<MoveRequest> {
        self.calls.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl MoveSink for RecordingSink {
    async fn apply_move(&self, request: &MoveRequest) -> AppResult<()> {
        self.calls.lock().expect("sink lock").push(request.clone());
        Ok(())
    }
}

/// A move service over `sample` plus the sink it reports to.
pub fn move_service(sample: &SampleTree) -> (MoveService, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let service = MoveService::new(
        Arc::new(FixedTreeSource(sample.roots.clone())),
        sink.clone(),
        &AppConfig::default(),
    );
    (service, sink)
}

/// A batch of `n` reports.
pub fn reports(n: usize) -> Vec<MoveItem> {
    (0..n).map(|_| MoveItem::Report(ReportId::new())).collect()
}
