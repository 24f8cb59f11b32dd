//! Innkeep: hotel, customer and reservation records kept in JSON files.
//!
//! Each collection is a single JSON array of objects. Records are decoded
//! into typed entities, deduplicated on load, and written back whole after
//! every change.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repository;
pub mod store;
pub mod tooling;
pub mod types;
