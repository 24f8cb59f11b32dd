//! Hotel command service.

use crate::commands::{CreateResult, DeleteResult, ListResult, ModifyResult};
use crate::config::CollectionPaths;
use crate::error::ApiError;
use crate::model::{Entity, Hotel, HotelUpdate};
use crate::repository::{ModifyOutcome, RecordRepository};
use crate::store::RecordStore;

pub struct HotelCommandService;

impl HotelCommandService {
    pub fn create<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        name: &str,
        location: &str,
        rooms: Vec<String>,
    ) -> Result<CreateResult<Hotel>, ApiError> {
        let hotel = Hotel::new(name, location, rooms);
        let outcome = repo.create(&hotel, &paths.hotels)?;
        Ok(CreateResult {
            record: hotel,
            outcome,
            path: paths.hotels.clone(),
        })
    }

    pub fn delete<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        name: &str,
    ) -> Result<DeleteResult, ApiError> {
        let outcome = repo.delete::<Hotel>(&name.to_string(), &paths.hotels)?;
        Ok(DeleteResult {
            key: name.to_string(),
            outcome,
            path: paths.hotels.clone(),
        })
    }

    /// Apply the non-empty fields of `update` to the hotel named `name`.
    pub fn modify<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        name: &str,
        update: &HotelUpdate,
    ) -> Result<ModifyResult<Hotel>, ApiError> {
        if update.is_empty() {
            return Err(ApiError::InvalidUpdate {
                kind: Hotel::KIND,
                reason: "no fields to update".to_string(),
            });
        }

        let key = name.to_string();
        let outcome = repo.update::<Hotel>(&key, &paths.hotels, |hotel| {
            hotel.modify_info(update)
        })?;
        let record = match outcome {
            ModifyOutcome::Updated => repo.find::<Hotel>(&key, &paths.hotels)?,
            _ => None,
        };
        Ok(ModifyResult {
            key,
            outcome,
            record,
            path: paths.hotels.clone(),
        })
    }

    pub fn list<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
    ) -> Result<ListResult<Hotel>, ApiError> {
        Ok(ListResult {
            records: repo.list(&paths.hotels)?,
            path: paths.hotels.clone(),
        })
    }

    pub fn show<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        name: &str,
    ) -> Result<Hotel, ApiError> {
        repo.get_or_error(&name.to_string(), &paths.hotels)
    }
}
