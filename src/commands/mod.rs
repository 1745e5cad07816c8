//! CLI command definitions and dispatch.

pub mod breadcrumb;
pub mod moves;
pub mod tree;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::adapters::JsonFileTreeSource;
use crate::output::OutputFormat;
use foldernav_core::config::AppConfig;
use foldernav_core::error::AppError;

/// Report folder navigation and move-destination picking
#[derive(Debug, Parser)]
#[command(name = "foldernav", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the folder tree as the destination picker would render it
    Tree(tree::TreeArgs),
    /// Show the breadcrumb trail of a folder
    Breadcrumb(breadcrumb::BreadcrumbArgs),
    /// Run one move session end to end
    Move(moves::MoveArgs),
}

/// Where the folder tree snapshot is read from
#[derive(Debug, Args)]
pub struct TreeFileArgs {
    /// JSON file holding the folder tree
    #[arg(long)]
    pub file: PathBuf,

    /// The file holds flat parent-linked rows instead of nested folders
    #[arg(long)]
    pub flat: bool,
}

impl TreeFileArgs {
    /// Tree source backed by the file
    pub fn source(&self) -> JsonFileTreeSource {
        JsonFileTreeSource::new(&self.file, self.flat)
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree(args) => tree::execute(args, config, self.format).await,
            Commands::Breadcrumb(args) => breadcrumb::execute(args, config, self.format).await,
            Commands::Move(args) => moves::execute(args, config, self.format).await,
        }
    }
}
