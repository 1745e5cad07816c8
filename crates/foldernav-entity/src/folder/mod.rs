//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{FolderNode, FolderRecord, ReportNode};
pub use tree::FolderTree;
