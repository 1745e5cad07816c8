//! Folder tree rendering command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use foldernav_core::config::AppConfig;
use foldernav_core::config::navigation::DefaultExpansion;
use foldernav_core::error::AppError;
use foldernav_core::result::AppResult;
use foldernav_core::types::FolderId;
use foldernav_entity::folder::FolderTree;
use foldernav_service::moves::{FolderRow, MoveValidator, RenderHint, visible_rows};
use foldernav_service::navigation::ExpansionState;

use super::TreeFileArgs;

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Tree snapshot
    #[command(flatten)]
    pub input: TreeFileArgs,

    /// Folder the items currently live in (omit for the root level)
    #[arg(short, long)]
    pub source: Option<FolderId>,

    /// Expand every folder instead of only the source's ancestors
    #[arg(long)]
    pub expand_all: bool,
}

/// Tree display row
#[derive(Debug, Serialize, Tabled)]
pub struct TreeDisplayRow {
    /// Indented name
    #[tabled(rename = "folder")]
    pub name: String,
    /// Folder ID
    pub id: String,
    /// Reports filed directly inside
    pub reports: u64,
    /// Current / disabled marker
    pub state: String,
}

impl TreeDisplayRow {
    /// Builds the display row for a picker row
    pub fn from_row(row: &FolderRow) -> Self {
        let chevron = match (row.has_children, row.expanded) {
            (false, _) => "  ",
            (true, false) => "▸ ",
            (true, true) => "▾ ",
        };
        Self {
            name: format!("{}{}{}", "  ".repeat(row.depth), chevron, row.name),
            id: row.id.to_string(),
            reports: row.report_count,
            state: hint_label(&row.hint).to_string(),
        }
    }
}

/// Short label for a render hint
pub fn hint_label(hint: &RenderHint) -> &'static str {
    if hint.current {
        "current"
    } else if hint.disabled {
        "disabled"
    } else {
        ""
    }
}

/// Expansion shown before any toggling; an unknown source is stale
fn initial_expansion(
    tree: &FolderTree,
    source: Option<FolderId>,
    expand_all: bool,
    default_expansion: DefaultExpansion,
) -> AppResult<ExpansionState> {
    let mut expansion = ExpansionState::new();
    if expand_all {
        expansion.expand_path(tree.iter().map(|(_, node)| node.id));
    } else if let Some(source) = source {
        let path = tree.find_path(source).ok_or_else(|| {
            AppError::stale_reference(format!("Folder {source} is no longer in the tree"))
        })?;
        if default_expansion == DefaultExpansion::Ancestors {
            expansion.expand_path(path);
        }
    }
    Ok(expansion)
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tree = args.input.source().load().await?;

    let expansion = initial_expansion(
        &tree,
        args.source,
        args.expand_all,
        config.navigation.default_expansion,
    )?;

    let validator = MoveValidator::new(&tree, args.source, &[]);
    let rows = visible_rows(&tree, &expansion, &validator, None);

    match format {
        OutputFormat::Json => output::print_json(&rows),
        OutputFormat::Table => {
            if validator.root_hint().current {
                println!("{} [current]", config.navigation.home_label);
            } else {
                println!("{}", config.navigation.home_label);
            }
            let display: Vec<TreeDisplayRow> = rows.iter().map(TreeDisplayRow::from_row).collect();
            output::print_list(&display, format, "No folders.");
        }
    }

    Ok(())
}
