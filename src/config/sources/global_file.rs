//! Global config file source: `$XDG_CONFIG_HOME/innkeep/config.toml`

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::{Path, PathBuf};

/// Location of the global config file, if it can be determined.
pub fn path() -> Option<PathBuf> {
    match xdg::global_config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!("Skipping global config file: {}", e);
            None
        }
    }
}

/// Add the optional global config file at `path`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> ConfigBuilder<DefaultState> {
    match path {
        Some(path) => builder.add_source(File::from(path).required(false)),
        None => builder,
    }
}
