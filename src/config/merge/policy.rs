//! Built-in defaults every config build starts from.

use crate::config::storage::{
    DEFAULT_CUSTOMERS_FILE, DEFAULT_HOTELS_FILE, DEFAULT_RESERVATIONS_FILE,
};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Config builder seeded with default collection file names.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("storage.hotels_file", DEFAULT_HOTELS_FILE)?
        .set_default("storage.customers_file", DEFAULT_CUSTOMERS_FILE)?
        .set_default("storage.reservations_file", DEFAULT_RESERVATIONS_FILE)
}
