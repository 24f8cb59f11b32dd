//! Tooling
//!
//! The command-line front end and the text/JSON renderers it prints with.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
