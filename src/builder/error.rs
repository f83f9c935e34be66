//! Configuration errors for engine builders and reconfiguration.

use crate::engine::RegistryError;
use thiserror::Error;

/// Errors that can occur when configuring an engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Players can only be reconfigured between games")]
    GameInProgress,

    #[error("Invalid game configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
