//! Customer command service. Every operation keys on email.

use crate::commands::{CreateResult, DeleteResult, ListResult, ModifyResult};
use crate::config::CollectionPaths;
use crate::error::ApiError;
use crate::model::{Customer, CustomerUpdate, Entity};
use crate::repository::{ModifyOutcome, RecordRepository};
use crate::store::RecordStore;

pub struct CustomerCommandService;

impl CustomerCommandService {
    pub fn create<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<CreateResult<Customer>, ApiError> {
        let customer = Customer::new(name, email, phone);
        let outcome = repo.create(&customer, &paths.customers)?;
        Ok(CreateResult {
            record: customer,
            outcome,
            path: paths.customers.clone(),
        })
    }

    pub fn delete<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        email: &str,
    ) -> Result<DeleteResult, ApiError> {
        let outcome = repo.delete::<Customer>(&email.to_string(), &paths.customers)?;
        Ok(DeleteResult {
            key: email.to_string(),
            outcome,
            path: paths.customers.clone(),
        })
    }

    pub fn modify<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        email: &str,
        update: &CustomerUpdate,
    ) -> Result<ModifyResult<Customer>, ApiError> {
        if update.is_empty() {
            return Err(ApiError::InvalidUpdate {
                kind: Customer::KIND,
                reason: "no fields to update".to_string(),
            });
        }

        let key = email.to_string();
        let outcome = repo.update::<Customer>(&key, &paths.customers, |customer| {
            customer.modify_info(update)
        })?;
        let record = match outcome {
            ModifyOutcome::Updated => repo.find::<Customer>(&key, &paths.customers)?,
            _ => None,
        };
        Ok(ModifyResult {
            key,
            outcome,
            record,
            path: paths.customers.clone(),
        })
    }

    pub fn list<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
    ) -> Result<ListResult<Customer>, ApiError> {
        Ok(ListResult {
            records: repo.list(&paths.customers)?,
            path: paths.customers.clone(),
        })
    }

    pub fn show<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        email: &str,
    ) -> Result<Customer, ApiError> {
        repo.get_or_error(&email.to_string(), &paths.customers)
    }
}
