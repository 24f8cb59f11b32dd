//! Entity Models
//!
//! Hotels, customers and reservations as plain values. Each converts to and
//! from the string-keyed `Record` the store persists.

pub mod customer;
pub mod hotel;
pub mod reservation;

use crate::error::StorageError;
use crate::types::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

pub use customer::{Customer, CustomerUpdate};
pub use hotel::{Hotel, HotelUpdate};
pub use reservation::{Reservation, ReservationKey};

/// A persisted entity identified by a natural key.
pub trait Entity: Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug {
    /// Human-readable entity name used in messages and errors.
    const KIND: &'static str;

    /// Natural key: unique within one collection.
    type Key: PartialEq + Clone + fmt::Debug + fmt::Display;

    fn key(&self) -> Self::Key;

    /// Record holding exactly this entity's fields, nested entities inlined.
    fn to_mapping(&self) -> Record;

    /// Rebuild an entity from its record.
    ///
    /// Fails when a field is missing or has the wrong type. Unknown fields are
    /// ignored.
    fn from_mapping(mapping: &Record) -> Result<Self, StorageError> {
        serde_json::from_value(serde_json::Value::Object(mapping.clone())).map_err(|e| {
            StorageError::MalformedRecord {
                kind: Self::KIND,
                reason: e.to_string(),
            }
        })
    }
}

/// Keep `current` unless `candidate` carries a non-empty replacement.
pub(crate) fn assign_non_empty(current: &mut String, candidate: Option<&str>) {
    if let Some(value) = candidate {
        if !value.is_empty() {
            *current = value.to_string();
        }
    }
}
