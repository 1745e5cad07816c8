//! # foldernav-entity
//!
//! Domain models for report folder navigation. The folder tree is a
//! read-only snapshot supplied by the data service; move requests are the
//! only thing the navigation core hands back. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`.

pub mod folder;
pub mod moves;
