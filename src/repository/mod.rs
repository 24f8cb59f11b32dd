//! Repository Operations
//!
//! Create, delete, modify and list for any [`Entity`], layered on a
//! [`RecordStore`]. Each call is one load, transform, save cycle against the
//! collection file passed in; the repository keeps no state between calls
//! and takes no locks.
//!
//! Business no-ops (duplicate create, missing key, missing file) come back as
//! outcome values. Only I/O, malformed data and rejected updates are errors.

use crate::error::ApiError;
use crate::model::Entity;
use crate::store::{JsonFileStore, RecordStore};
use crate::types::Record;
use serde::Serialize;
use std::path::Path;

/// Result of a create-or-skip call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateOutcome {
    Created,
    /// A record with the same key exists; the file was not written.
    AlreadyExists,
}

/// Result of a delete-by-key call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum DeleteOutcome {
    /// The collection file does not exist; nothing was written.
    CollectionMissing,
    /// No record matched. The collection was still rewritten.
    NotFound,
    Deleted { count: usize },
}

/// Result of a modify-by-key call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifyOutcome {
    /// The collection file does not exist; nothing was written.
    CollectionMissing,
    /// No record matched. The collection was rewritten unchanged.
    NotFound,
    Updated,
}

/// Stateless repository over a record store.
pub struct RecordRepository<S: RecordStore = JsonFileStore> {
    store: S,
}

impl RecordRepository<JsonFileStore> {
    /// Repository over JSON collection files.
    pub fn json() -> Self {
        Self::new(JsonFileStore::new())
    }
}

impl Default for RecordRepository<JsonFileStore> {
    fn default() -> Self {
        Self::json()
    }
}

impl<S: RecordStore> RecordRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append `entity` unless a record with its key already exists.
    pub fn create<E: Entity>(&self, entity: &E, path: &Path) -> Result<CreateOutcome, ApiError> {
        let mut records = self.store.load(path)?.unwrap_or_default();
        let key = entity.key();

        if position_of::<E>(&records, &key)?.is_some() {
            tracing::warn!(
                kind = E::KIND,
                key = %key,
                path = %path.display(),
                "Record already exists, skipping create"
            );
            return Ok(CreateOutcome::AlreadyExists);
        }

        records.push(entity.to_mapping());
        self.store.save(&records, path)?;
        tracing::info!(kind = E::KIND, key = %key, path = %path.display(), "Created record");
        Ok(CreateOutcome::Created)
    }

    /// Remove every record whose key equals `key`.
    pub fn delete<E: Entity>(&self, key: &E::Key, path: &Path) -> Result<DeleteOutcome, ApiError> {
        let records = match self.store.load(path)? {
            Some(records) => records,
            None => return Ok(DeleteOutcome::CollectionMissing),
        };

        let before = records.len();
        let mut kept = Vec::with_capacity(before);
        for record in records {
            if E::from_mapping(&record)?.key() != *key {
                kept.push(record);
            }
        }
        let count = before - kept.len();

        self.store.save(&kept, path)?;

        if count == 0 {
            tracing::debug!(kind = E::KIND, key = %key, path = %path.display(), "No record to delete");
            Ok(DeleteOutcome::NotFound)
        } else {
            tracing::info!(
                kind = E::KIND,
                key = %key,
                count,
                path = %path.display(),
                "Deleted records"
            );
            Ok(DeleteOutcome::Deleted { count })
        }
    }

    /// Merge `patch` into the first record whose key equals `key`.
    ///
    /// Fields absent from `patch` keep their stored values. The merged record
    /// must still decode as `E` and keep the same key.
    pub fn modify<E: Entity>(
        &self,
        key: &E::Key,
        patch: &Record,
        path: &Path,
    ) -> Result<ModifyOutcome, ApiError> {
        self.modify_with::<E>(key, path, |_| patch.clone())
    }

    /// Apply `change` to the decoded record whose key equals `key` and merge
    /// the result back. Stored fields `E` does not know about are kept.
    pub fn update<E: Entity>(
        &self,
        key: &E::Key,
        path: &Path,
        change: impl FnOnce(&mut E),
    ) -> Result<ModifyOutcome, ApiError> {
        self.modify_with::<E>(key, path, |current| {
            let mut changed = current.clone();
            change(&mut changed);
            changed.to_mapping()
        })
    }

    fn modify_with<E: Entity>(
        &self,
        key: &E::Key,
        path: &Path,
        patch_for: impl FnOnce(&E) -> Record,
    ) -> Result<ModifyOutcome, ApiError> {
        let mut records = match self.store.load(path)? {
            Some(records) => records,
            None => return Ok(ModifyOutcome::CollectionMissing),
        };

        let Some((index, current)) = find_in::<E>(&records, key)? else {
            self.store.save(&records, path)?;
            tracing::debug!(kind = E::KIND, key = %key, path = %path.display(), "No record to modify");
            return Ok(ModifyOutcome::NotFound);
        };

        let mut merged = records[index].clone();
        for (field, value) in patch_for(&current) {
            merged.insert(field, value);
        }

        let decoded = E::from_mapping(&merged).map_err(|e| ApiError::InvalidUpdate {
            kind: E::KIND,
            reason: e.to_string(),
        })?;
        if decoded.key() != *key {
            return Err(ApiError::InvalidUpdate {
                kind: E::KIND,
                reason: format!("update would change key from '{}' to '{}'", key, decoded.key()),
            });
        }

        records[index] = merged;
        self.store.save(&records, path)?;
        tracing::info!(kind = E::KIND, key = %key, path = %path.display(), "Modified record");
        Ok(ModifyOutcome::Updated)
    }

    /// Every record in the collection, or `None` when the file does not exist.
    pub fn list<E: Entity>(&self, path: &Path) -> Result<Option<Vec<E>>, ApiError> {
        let Some(records) = self.store.load(path)? else {
            return Ok(None);
        };
        let entities = records
            .iter()
            .map(E::from_mapping)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(entities))
    }

    /// First record whose key equals `key`.
    pub fn find<E: Entity>(&self, key: &E::Key, path: &Path) -> Result<Option<E>, ApiError> {
        let Some(records) = self.store.load(path)? else {
            return Ok(None);
        };
        for record in &records {
            let entity = E::from_mapping(record)?;
            if entity.key() == *key {
                return Ok(Some(entity));
            }
        }
        Ok(None)
    }

    /// Like [`find`](Self::find) but a missing record is an error.
    pub fn get_or_error<E: Entity>(&self, key: &E::Key, path: &Path) -> Result<E, ApiError> {
        self.find(key, path)?.ok_or_else(|| ApiError::NotFound {
            kind: E::KIND,
            key: key.to_string(),
        })
    }
}

fn position_of<E: Entity>(records: &[Record], key: &E::Key) -> Result<Option<usize>, ApiError> {
    Ok(find_in::<E>(records, key)?.map(|(index, _)| index))
}

fn find_in<E: Entity>(records: &[Record], key: &E::Key) -> Result<Option<(usize, E)>, ApiError> {
    for (index, record) in records.iter().enumerate() {
        let entity = E::from_mapping(record)?;
        if entity.key() == *key {
            return Ok(Some((index, entity)));
        }
    }
    Ok(None)
}
