//! Folder tree navigation: expansion state, breadcrumbs, and the current
//! folder of the browsing view.

pub mod breadcrumb;
pub mod expansion;
pub mod navigator;

pub use breadcrumb::{Breadcrumb, BreadcrumbPath};
pub use expansion::ExpansionState;
pub use navigator::FolderNavigator;
