//! Environment variable source: INNKEEP__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add environment variable overlay to builder.
/// `INNKEEP__STORAGE__DATA_DIR` sets `storage.data_dir`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("INNKEEP")
            .separator("__")
            .try_parsing(true),
    )
}
