//! Move session configuration.

use serde::{Deserialize, Serialize};

/// Move session settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveConfig {
    /// Refuse to confirm a session in which no destination was ever picked.
    ///
    /// When `false`, confirming without a selection moves the items to the
    /// root level.
    #[serde(default)]
    pub require_explicit_destination: bool,
}
