//! StorageConfig and resolution of the three collection file paths.

use crate::config::xdg;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_HOTELS_FILE: &str = "hotels.json";
pub(crate) const DEFAULT_CUSTOMERS_FILE: &str = "customers.json";
pub(crate) const DEFAULT_RESERVATIONS_FILE: &str = "reservations.json";

fn default_hotels_file() -> PathBuf {
    PathBuf::from(DEFAULT_HOTELS_FILE)
}

fn default_customers_file() -> PathBuf {
    PathBuf::from(DEFAULT_CUSTOMERS_FILE)
}

fn default_reservations_file() -> PathBuf {
    PathBuf::from(DEFAULT_RESERVATIONS_FILE)
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the collection files; None means the XDG default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Hotel collection file (relative to data_dir unless absolute)
    #[serde(default = "default_hotels_file")]
    pub hotels_file: PathBuf,

    /// Customer collection file (relative to data_dir unless absolute)
    #[serde(default = "default_customers_file")]
    pub customers_file: PathBuf,

    /// Reservation collection file (relative to data_dir unless absolute)
    #[serde(default = "default_reservations_file")]
    pub reservations_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            hotels_file: default_hotels_file(),
            customers_file: default_customers_file(),
            reservations_file: default_reservations_file(),
        }
    }
}

/// Resolved locations of the hotel, customer and reservation files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionPaths {
    pub hotels: PathBuf,
    pub customers: PathBuf,
    pub reservations: PathBuf,
}

impl CollectionPaths {
    /// Default file names inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        StorageConfig::default().paths_in(data_dir)
    }
}

impl StorageConfig {
    /// Resolve collection paths. `data_dir_override` (the CLI flag) wins over
    /// the configured directory, which wins over the XDG default.
    pub fn resolve_paths(&self, data_dir_override: Option<&Path>) -> Result<CollectionPaths, ApiError> {
        let data_dir = self.resolve_data_dir(data_dir_override)?;
        Ok(self.paths_in(&data_dir))
    }

    /// The directory collection files are resolved against.
    pub fn resolve_data_dir(&self, data_dir_override: Option<&Path>) -> Result<PathBuf, ApiError> {
        match (data_dir_override, &self.data_dir) {
            (Some(dir), _) => Ok(dir.to_path_buf()),
            (None, Some(dir)) => Ok(dir.clone()),
            (None, None) => xdg::default_data_dir(),
        }
    }

    fn paths_in(&self, data_dir: &Path) -> CollectionPaths {
        CollectionPaths {
            hotels: data_dir.join(&self.hotels_file),
            customers: data_dir.join(&self.customers_file),
            reservations: data_dir.join(&self.reservations_file),
        }
    }
}
