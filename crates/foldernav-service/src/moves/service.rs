//! Move orchestration against the data service.

use std::sync::Arc;

use tracing::{error, info};

use foldernav_core::config::AppConfig;
use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;
use foldernav_core::types::FolderId;
use foldernav_entity::folder::FolderTree;
use foldernav_entity::moves::{MoveItem, MoveRequest};

use super::session::{MoveSession, SessionSettings};
use crate::traits::{FolderTreeSource, MoveSink};

/// Opens move sessions on fresh tree snapshots and forwards confirmed
/// moves to the data service.
#[derive(Debug, Clone)]
pub struct MoveService {
    /// Where tree snapshots come from.
    tree_source: Arc<dyn FolderTreeSource>,
    /// Where confirmed moves go.
    sink: Arc<dyn MoveSink>,
    /// Settings applied to every session opened here.
    settings: SessionSettings,
}

impl MoveService {
    /// Creates a new move service.
    pub fn new(
        tree_source: Arc<dyn FolderTreeSource>,
        sink: Arc<dyn MoveSink>,
        config: &AppConfig,
    ) -> Self {
        Self {
            tree_source,
            sink,
            settings: SessionSettings::from(config),
        }
    }

    /// Fetches a snapshot and opens a session on it.
    ///
    /// A failing fetch means the session cannot open.
    pub async fn begin(
        &self,
        source: Option<FolderId>,
        items: Vec<MoveItem>,
    ) -> AppResult<MoveSession> {
        let roots = self.tree_source.fetch_folder_tree().await.map_err(|e| {
            error!(error = %e, "Folder tree fetch failed");
            AppError::with_source(
                e.kind,
                format!("Failed to fetch folder tree: {}", e.message),
                e,
            )
        })?;
        let tree = FolderTree::new(roots)?;

        let mut session = MoveSession::with_settings(self.settings);
        session.open(tree, source, items)?;
        Ok(session)
    }

    /// Confirms the session and hands the move to the data service once.
    ///
    /// The session is closed even when the data service fails; reporting
    /// and retrying is left to the caller.
    pub async fn commit(&self, session: &mut MoveSession) -> AppResult<MoveRequest> {
        let request = session.confirm()?;

        self.sink.apply_move(&request).await.map_err(|e| {
            error!(
                error = %e,
                destination = ?request.destination,
                item_count = request.items.len(),
                "Move rejected by data service"
            );
            e
        })?;

        info!(
            destination = ?request.destination,
            item_count = request.items.len(),
            "Move applied"
        );

        Ok(request)
    }

    /// Cancels the session; nothing reaches the data service.
    pub fn abort(&self, session: &mut MoveSession) -> AppResult<()> {
        session.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use foldernav_core::error::ErrorKind;
    use foldernav_core::types::ReportId;
    use foldernav_entity::folder::FolderNode;

    #[derive(Debug)]
    struct StaticSource(AppResult<Vec<FolderNode>>);

    #[async_trait]
    impl FolderTreeSource for StaticSource {
        async fn fetch_folder_tree(&self) -> AppResult<Vec<FolderNode>> {
            self.0.clone()
        }
    }

    #[derive(Debug, Default)]
    struct RecordingSink {
        calls: Mutex<Vec<MoveRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl MoveSink for RecordingSink {
        async fn apply_move(&self, request: &MoveRequest) -> AppResult<()> {
            self.calls.lock().unwrap().push(request.clone());
            if self.fail {
                Err(AppError::external_service("backend down"))
            } else {
                Ok(())
            }
        }
    }

    fn service(
        roots: AppResult<Vec<FolderNode>>,
        fail: bool,
    ) -> (MoveService, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink {
            calls: Mutex::new(Vec::new()),
            fail,
        });
        let svc = MoveService::new(
            Arc::new(StaticSource(roots)),
            sink.clone(),
            &AppConfig::default(),
        );
        (svc, sink)
    }

    #[tokio::test]
    async fn test_commit_calls_sink_once() {
        let b = FolderId::new();
        let (svc, sink) = service(Ok(vec![FolderNode::new(b, "B")]), false);

        let mut session = svc
            .begin(None, vec![MoveItem::Report(ReportId::new())])
            .await
            .unwrap();
        session.select_candidate(Some(b)).unwrap();
        let request = svc.commit(&mut session).await.unwrap();

        assert_eq!(request.destination, Some(b));
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
        assert!(svc.commit(&mut session).await.is_err());
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_prevents_open() {
        let (svc, _) = service(Err(AppError::external_service("timeout")), false);
        let err = svc
            .begin(None, vec![MoveItem::Report(ReportId::new())])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
    }

    #[tokio::test]
    async fn test_sink_failure_is_not_retried() {
        let (svc, sink) = service(Ok(Vec::new()), true);
        let mut session = svc
            .begin(None, vec![MoveItem::Report(ReportId::new())])
            .await
            .unwrap();

        let err = svc.commit(&mut session).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_abort_skips_sink() {
        let (svc, sink) = service(Ok(Vec::new()), false);
        let mut session = svc
            .begin(None, vec![MoveItem::Report(ReportId::new())])
            .await
            .unwrap();
        svc.abort(&mut session).unwrap();
        assert!(sink.calls.lock().unwrap().is_empty());
    }
}
