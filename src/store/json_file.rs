//! JSON file implementation of the record store.
//!
//! A collection file holds one JSON array whose entries are objects.

use crate::error::StorageError;
use crate::store::{dedup_records, RecordStore};
use crate::types::Record;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Record store backed by one JSON file per collection.
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self, path: &Path) -> Result<Option<Vec<Record>>, StorageError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Record file absent");
                return Ok(None);
            }
            Err(e) => {
                return Err(StorageError::FileAccess {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let value: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                StorageError::MalformedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?;

        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(StorageError::MalformedFile {
                    path: path.to_path_buf(),
                    reason: format!("expected an array of records, found {}", json_kind(&other)),
                })
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Value::Object(record) => records.push(record),
                other => {
                    return Err(StorageError::MalformedFile {
                        path: path.to_path_buf(),
                        reason: format!("entry {} is {}, not an object", index, json_kind(&other)),
                    })
                }
            }
        }

        let read = records.len();
        let records = dedup_records(records);
        if records.len() < read {
            tracing::debug!(
                path = %path.display(),
                dropped = read - records.len(),
                "Dropped duplicate records on load"
            );
        }
        tracing::debug!(path = %path.display(), count = records.len(), "Loaded records");
        Ok(Some(records))
    }

    fn save(&self, records: &[Record], path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::FileAccess {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut contents = serde_json::to_vec_pretty(records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        contents.push(b'\n');

        let file = File::create(path).map_err(|e| StorageError::FileAccess {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&contents)
            .and_then(|_| writer.flush())
            .map_err(|e| StorageError::FileAccess {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), count = records.len(), "Saved records");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
