//! ConfigLoader facade delegating to merge service.

use super::merge::MergeService;
use super::InnkeepConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment.
    pub fn load(data_dir: Option<&Path>) -> Result<InnkeepConfig, ConfigError> {
        MergeService::load(data_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<InnkeepConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> InnkeepConfig {
        InnkeepConfig::default()
    }
}
