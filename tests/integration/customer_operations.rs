use innkeep::commands::CustomerCommandService;
use innkeep::error::ApiError;
use innkeep::model::{Customer, CustomerUpdate};
use innkeep::repository::{CreateOutcome, DeleteOutcome, ModifyOutcome, RecordRepository};
use tempfile::TempDir;

use crate::integration::support::paths_in;

#[test]
fn email_is_the_identity_for_create() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();

    let first =
        CustomerCommandService::create(&repo, &paths, "John Doe", "john@example.com", "123")
            .unwrap();
    assert_eq!(first.outcome, CreateOutcome::Created);

    // Same name, different email: a distinct customer.
    let namesake =
        CustomerCommandService::create(&repo, &paths, "John Doe", "jd@example.com", "123")
            .unwrap();
    assert_eq!(namesake.outcome, CreateOutcome::Created);

    let duplicate =
        CustomerCommandService::create(&repo, &paths, "Johnny", "john@example.com", "999")
            .unwrap();
    assert_eq!(duplicate.outcome, CreateOutcome::AlreadyExists);

    assert_eq!(CustomerCommandService::list(&repo, &paths).unwrap().len(), 2);
}

#[test]
fn modify_changes_phone_and_keeps_other_fields() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();
    CustomerCommandService::create(&repo, &paths, "John Doe", "john@example.com", "123").unwrap();

    let update = CustomerUpdate {
        phone: Some("555-0000".to_string()),
        ..CustomerUpdate::default()
    };
    let result =
        CustomerCommandService::modify(&repo, &paths, "john@example.com", &update).unwrap();
    assert_eq!(result.outcome, ModifyOutcome::Updated);

    let stored = CustomerCommandService::show(&repo, &paths, "john@example.com").unwrap();
    assert_eq!(stored, Customer::new("John Doe", "john@example.com", "555-0000"));
}

#[test]
fn modify_that_changes_email_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();
    CustomerCommandService::create(&repo, &paths, "John Doe", "john@example.com", "123").unwrap();

    let update = CustomerUpdate {
        email: Some("other@example.com".to_string()),
        ..CustomerUpdate::default()
    };
    let err =
        CustomerCommandService::modify(&repo, &paths, "john@example.com", &update).unwrap_err();
    assert!(matches!(err, ApiError::InvalidUpdate { kind: "customer", .. }));

    let stored = CustomerCommandService::show(&repo, &paths, "john@example.com").unwrap();
    assert_eq!(stored.phone, "123");
}

#[test]
fn modify_and_delete_of_unknown_email() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();
    CustomerCommandService::create(&repo, &paths, "John Doe", "john@example.com", "123").unwrap();

    let update = CustomerUpdate {
        name: Some("Nobody".to_string()),
        ..CustomerUpdate::default()
    };
    let modified =
        CustomerCommandService::modify(&repo, &paths, "nobody@example.com", &update).unwrap();
    assert_eq!(modified.outcome, ModifyOutcome::NotFound);
    assert!(modified.record.is_none());

    let deleted = CustomerCommandService::delete(&repo, &paths, "nobody@example.com").unwrap();
    assert_eq!(deleted.outcome, DeleteOutcome::NotFound);

    let remaining = CustomerCommandService::list(&repo, &paths).unwrap().records.unwrap();
    assert_eq!(remaining, vec![Customer::new("John Doe", "john@example.com", "123")]);
}
