//! Folder entity models.

use serde::{Deserialize, Serialize};

use foldernav_core::types::{FolderId, ReportId};

/// A folder in the report hierarchy, with its subfolders in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Number of reports filed directly in this folder.
    #[serde(default)]
    pub report_count: u64,
    /// Reports filed directly in this folder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<ReportNode>,
    /// Child folders, in insertion/display order.
    #[serde(default)]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Creates a childless folder node.
    pub fn new(id: FolderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            report_count: 0,
            reports: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child folder, keeping existing order.
    pub fn with_child(mut self, child: FolderNode) -> Self {
        self.children.push(child);
        self
    }

    /// Attaches a report and bumps the report count.
    pub fn with_report(mut self, report: ReportNode) -> Self {
        self.reports.push(report);
        self.report_count += 1;
        self
    }

    /// Check if this folder has subfolders.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A report document listed under a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportNode {
    /// Report identifier.
    pub id: ReportId,
    /// Report name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A folder as the data service stores it: a flat row linked to its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder (None for top-level folders).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// Number of reports filed directly in this folder.
    #[serde(default)]
    pub report_count: u64,
}
