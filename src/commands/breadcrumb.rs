//! Breadcrumb command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use foldernav_core::config::AppConfig;
use foldernav_core::error::AppError;
use foldernav_core::types::FolderId;
use foldernav_service::navigation::FolderNavigator;

use super::TreeFileArgs;

/// Arguments for the breadcrumb command
#[derive(Debug, Args)]
pub struct BreadcrumbArgs {
    /// Tree snapshot
    #[command(flatten)]
    pub input: TreeFileArgs,

    /// Folder to resolve (omit for the root level)
    #[arg(long)]
    pub folder: Option<FolderId>,
}

/// Breadcrumb display row
#[derive(Debug, Serialize, Tabled)]
struct CrumbRow {
    /// Position in the trail
    level: usize,
    /// Folder ID
    id: String,
    /// Folder name
    name: String,
}

/// Execute the breadcrumb command
pub async fn execute(
    args: &BreadcrumbArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tree = args.input.source().load().await?;

    let mut navigator = FolderNavigator::new();
    if let Some(folder) = args.folder {
        navigator.navigate_to(folder);
    }
    let trail = navigator.breadcrumbs(&tree)?;

    match format {
        OutputFormat::Json => output::print_json(&trail),
        OutputFormat::Table => {
            let nav = &config.navigation;
            if trail.is_empty() {
                println!("{}", nav.home_label);
            } else {
                println!(
                    "{}{}{}",
                    nav.home_label,
                    nav.breadcrumb_separator,
                    trail.display(&nav.breadcrumb_separator)
                );
            }
            let rows: Vec<CrumbRow> = trail
                .iter()
                .enumerate()
                .map(|(level, crumb)| CrumbRow {
                    level,
                    id: crumb.id.to_string(),
                    name: crumb.name.clone(),
                })
                .collect();
            output::print_list(&rows, format, "At the root level.");
        }
    }

    Ok(())
}
