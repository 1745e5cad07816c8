//! Move session command.

use std::sync::Arc;

use clap::Args;
use tracing::info;

use crate::adapters::StdoutMoveSink;
use crate::output::{self, OutputFormat};
use foldernav_core::config::AppConfig;
use foldernav_core::error::AppError;
use foldernav_core::types::{FolderId, ReportId};
use foldernav_entity::moves::MoveItem;
use foldernav_service::moves::{MoveService, SelectionOutcome};

use super::TreeFileArgs;
use super::tree::TreeDisplayRow;

/// Arguments for the move command
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Tree snapshot
    #[command(flatten)]
    pub input: TreeFileArgs,

    /// Folder the items currently live in (omit for the root level)
    #[arg(long)]
    pub from: Option<FolderId>,

    /// Destination folder (omit for the root level)
    #[arg(long)]
    pub to: Option<FolderId>,

    /// Report to move (repeatable)
    #[arg(long = "report")]
    pub reports: Vec<ReportId>,

    /// Folder to move, with its contents (repeatable)
    #[arg(long = "folder")]
    pub folders: Vec<FolderId>,

    /// Show the picker and cancel instead of confirming
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the move command
pub async fn execute(
    args: &MoveArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let items: Vec<MoveItem> = args
        .reports
        .iter()
        .copied()
        .map(MoveItem::Report)
        .chain(args.folders.iter().copied().map(MoveItem::Folder))
        .collect();

    let service = MoveService::new(
        Arc::new(args.input.source()),
        Arc::new(StdoutMoveSink),
        config,
    );
    let mut session = service.begin(args.from, items).await?;

    if let Some(to) = args.to {
        if session.select_candidate(Some(to))? == SelectionOutcome::Rejected {
            output::print_warning(&format!(
                "Folder {to} cannot receive these items; keeping the current choice"
            ));
        }
    }

    if args.dry_run {
        let rows = session.rows()?;
        match format {
            OutputFormat::Json => output::print_json(&rows),
            OutputFormat::Table => {
                let display: Vec<TreeDisplayRow> =
                    rows.iter().map(TreeDisplayRow::from_row).collect();
                output::print_list(&display, format, "No folders.");
            }
        }
        service.abort(&mut session)?;
        info!("Dry run: move cancelled");
        return Ok(());
    }

    let request = service.commit(&mut session).await?;
    if format == OutputFormat::Table {
        output::print_success(&format!("Moved {} item(s)", request.item_count()));
    }

    Ok(())
}
