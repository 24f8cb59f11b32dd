//! MergeService: orchestrates sources, applies merge policy, deserializes to InnkeepConfig.

use crate::config::sources::{data_dir_file, environment, global_file};
use crate::config::{xdg, InnkeepConfig};
use config::ConfigError;
use std::path::{Path, PathBuf};

use super::policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: defaults (lowest) -> global file -> data dir file -> environment (highest).
    ///
    /// The data dir file is read from `data_dir` when given, otherwise from
    /// the `storage.data_dir` the global file and environment settle on,
    /// otherwise from the XDG default data directory.
    pub fn load(data_dir: Option<&Path>) -> Result<InnkeepConfig, ConfigError> {
        Self::load_layers(global_file::path().as_deref(), data_dir)
    }

    pub(crate) fn load_layers(
        global_path: Option<&Path>,
        data_dir: Option<&Path>,
    ) -> Result<InnkeepConfig, ConfigError> {
        let data_dir = match data_dir {
            Some(dir) => Some(dir.to_path_buf()),
            None => Self::configured_data_dir(global_path)?,
        };

        let builder = policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global_path);
        let builder = match &data_dir {
            Some(dir) => data_dir_file::add_to_builder(builder, dir),
            None => builder,
        };
        let builder = environment::add_to_builder(builder);

        builder.build()?.try_deserialize()
    }

    /// Data directory named by the global file or environment, else the XDG default.
    fn configured_data_dir(global_path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global_path);
        let builder = environment::add_to_builder(builder);
        let config: InnkeepConfig = builder.build()?.try_deserialize()?;

        Ok(config
            .storage
            .data_dir
            .or_else(|| xdg::default_data_dir().ok()))
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<InnkeepConfig, ConfigError> {
        use config::File;

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let builder = policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder);

        builder.build()?.try_deserialize()
    }
}
