//! Core types shared by the record store, models and repository.

/// Record: one persisted entry, a string-keyed JSON object.
///
/// Key order is preserved, so a record written from `to_mapping` keeps its
/// field order on disk.
pub type Record = serde_json::Map<String, serde_json::Value>;
