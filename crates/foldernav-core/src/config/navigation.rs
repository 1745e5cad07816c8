//! Folder navigation configuration.

use serde::{Deserialize, Serialize};

/// Which folders are shown expanded when a move session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultExpansion {
    /// Start fully collapsed.
    None,
    /// Expand every folder from the top level down to the source folder.
    Ancestors,
}

impl Default for DefaultExpansion {
    fn default() -> Self {
        Self::Ancestors
    }
}

impl std::fmt::Display for DefaultExpansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultExpansion::None => write!(f, "none"),
            DefaultExpansion::Ancestors => write!(f, "ancestors"),
        }
    }
}

/// Folder tree navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Expansion applied when a move session opens.
    #[serde(default)]
    pub default_expansion: DefaultExpansion,
    /// Separator used when a breadcrumb is rendered as a single line.
    #[serde(default = "default_separator")]
    pub breadcrumb_separator: String,
    /// Label of the "Home" affordance that navigates back to the root.
    #[serde(default = "default_home_label")]
    pub home_label: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_expansion: DefaultExpansion::default(),
            breadcrumb_separator: default_separator(),
            home_label: default_home_label(),
        }
    }
}

fn default_separator() -> String {
    " / ".to_string()
}

fn default_home_label() -> String {
    "Home".to_string()
}
