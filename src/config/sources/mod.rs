//! Config sources, lowest precedence first.

pub mod data_dir_file;
pub mod environment;
pub mod global_file;
