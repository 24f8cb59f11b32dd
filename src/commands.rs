//! Command services: one entry point per CLI command variant.
//!
//! Services own the workflow for each entity family; the CLI parses, calls
//! one service method, and formats the typed result.

pub mod customer;
pub mod hotel;
pub mod reservation;
pub mod seed;

use crate::repository::{CreateOutcome, DeleteOutcome, ModifyOutcome};
use serde::Serialize;
use std::path::PathBuf;

pub use customer::CustomerCommandService;
pub use hotel::HotelCommandService;
pub use reservation::ReservationCommandService;
pub use seed::{SeedCommandService, SeedResult};

/// Result of a create command.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResult<E> {
    pub record: E,
    pub outcome: CreateOutcome,
    pub path: PathBuf,
}

/// Result of a delete or cancel command.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    pub key: String,
    pub outcome: DeleteOutcome,
    pub path: PathBuf,
}

/// Result of a modify command. `record` is the stored value after an update.
#[derive(Debug, Clone, Serialize)]
pub struct ModifyResult<E> {
    pub key: String,
    pub outcome: ModifyOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<E>,
    pub path: PathBuf,
}

/// Result of a list command. `records` is None when the collection file does not exist.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult<E> {
    pub records: Option<Vec<E>>,
    pub path: PathBuf,
}

impl<E> ListResult<E> {
    pub fn len(&self) -> usize {
        self.records.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
