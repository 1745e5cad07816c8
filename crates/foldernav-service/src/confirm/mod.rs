//! Confirm-before-destructive-action gate.

pub mod gate;

pub use gate::{ConfirmRequest, ConfirmVariant, ConfirmationGate, PendingConfirmation};
