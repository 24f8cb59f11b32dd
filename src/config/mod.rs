//! Configuration
//!
//! Layered settings: built-in defaults, the global config file, the data
//! directory's own config file, then `INNKEEP__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod storage;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use storage::{CollectionPaths, StorageConfig};

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Effective innkeep configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InnkeepConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
