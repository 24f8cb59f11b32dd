//! Record Store
//!
//! Whole-collection persistence for record files. Every call reads or writes
//! the complete collection; nothing is cached between calls.

pub mod json_file;

use crate::error::StorageError;
use crate::types::Record;
use std::path::Path;

pub use json_file::JsonFileStore;

/// Record Store interface
pub trait RecordStore: Send + Sync {
    /// Load the collection at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. Structurally equal
    /// records are collapsed to their first occurrence.
    fn load(&self, path: &Path) -> Result<Option<Vec<Record>>, StorageError>;

    /// Overwrite the collection at `path` with `records`.
    fn save(&self, records: &[Record], path: &Path) -> Result<(), StorageError>;
}

/// Drop records equal to an earlier record, keeping first-occurrence order.
///
/// Equality is structural: key order inside a record does not matter.
pub fn dedup_records(records: Vec<Record>) -> Vec<Record> {
    let mut unique: Vec<Record> = Vec::with_capacity(records.len());
    for record in records {
        if !unique.contains(&record) {
            unique.push(record);
        }
    }
    unique
}
