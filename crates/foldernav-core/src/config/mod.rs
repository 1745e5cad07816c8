//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so a missing file still
//! yields a usable configuration.

pub mod logging;
pub mod moves;
pub mod navigation;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::logging::LoggingConfig;
use self::moves::MoveConfig;
use self::navigation::NavigationConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Folder tree navigation settings.
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Move session settings.
    #[serde(default)]
    pub moves: MoveConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the base file at `path` (extension optional) with an
    /// environment-specific overlay `config/{env}` and environment
    /// variables prefixed with `FOLDERNAV__`. Missing files are skipped.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOLDERNAV")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        debug!(
            path,
            env,
            default_expansion = %loaded.navigation.default_expansion,
            "Configuration loaded"
        );

        Ok(loaded)
    }
}
