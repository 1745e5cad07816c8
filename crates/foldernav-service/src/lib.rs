//! # foldernav-service
//!
//! Folder navigation and move-destination picking for report folders.
//! Everything here runs synchronously against an immutable
//! [`FolderTree`](foldernav_entity::folder::FolderTree) snapshot, except
//! the [`MoveService`] and [`ConfirmationGate`] boundaries, which hand off
//! to asynchronous collaborators.

pub mod confirm;
pub mod moves;
pub mod navigation;
pub mod traits;

pub use confirm::ConfirmationGate;
pub use moves::{MoveService, MoveSession, MoveValidator};
pub use navigation::{BreadcrumbPath, ExpansionState, FolderNavigator};
