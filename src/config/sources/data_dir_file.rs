//! Data directory config source: `<data_dir>/innkeep.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;

pub const FILE_NAME: &str = "innkeep.toml";

/// Add the optional config file kept next to the collection files.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    data_dir: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(data_dir.join(FILE_NAME)).required(false))
}
