use innkeep::commands::{
    CustomerCommandService, HotelCommandService, ReservationCommandService, SeedCommandService,
};
use innkeep::config::CollectionPaths;
use innkeep::error::ApiError;
use innkeep::model::{CustomerUpdate, Reservation};
use innkeep::repository::{CreateOutcome, DeleteOutcome, RecordRepository};
use tempfile::TempDir;

use crate::integration::support::{paths_in, read_json};

fn stock(repo: &RecordRepository, paths: &CollectionPaths) {
    HotelCommandService::create(
        repo,
        paths,
        "Hotel A",
        "City A",
        vec!["101".to_string(), "102".to_string()],
    )
    .unwrap();
    CustomerCommandService::create(repo, paths, "John Doe", "john@example.com", "123").unwrap();
}

#[test]
fn reserve_twice_then_cancel() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();
    stock(&repo, &paths);

    let first =
        ReservationCommandService::create(&repo, &paths, "john@example.com", "Hotel A", "101")
            .unwrap();
    assert_eq!(first.outcome, CreateOutcome::Created);
    let second =
        ReservationCommandService::create(&repo, &paths, "john@example.com", "Hotel A", "101")
            .unwrap();
    assert_eq!(second.outcome, CreateOutcome::AlreadyExists);
    assert_eq!(ReservationCommandService::list(&repo, &paths).unwrap().len(), 1);

    let cancelled =
        ReservationCommandService::cancel(&repo, &paths, "john@example.com", "Hotel A", "101")
            .unwrap();
    assert_eq!(cancelled.outcome, DeleteOutcome::Deleted { count: 1 });
    assert_eq!(read_json(&paths.reservations), serde_json::json!([]));
}

#[test]
fn cancel_removes_only_the_matching_reservation() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();
    stock(&repo, &paths);
    for room in ["101", "102"] {
        ReservationCommandService::create(&repo, &paths, "john@example.com", "Hotel A", room)
            .unwrap();
    }

    ReservationCommandService::cancel(&repo, &paths, "john@example.com", "Hotel A", "101")
        .unwrap();

    let remaining = ReservationCommandService::list(&repo, &paths)
        .unwrap()
        .records
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].room_number, "102");
}

#[test]
fn reservation_keeps_its_snapshot_after_customer_changes() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();
    stock(&repo, &paths);
    ReservationCommandService::create(&repo, &paths, "john@example.com", "Hotel A", "101").unwrap();

    let update = CustomerUpdate {
        phone: Some("999".to_string()),
        ..CustomerUpdate::default()
    };
    CustomerCommandService::modify(&repo, &paths, "john@example.com", &update).unwrap();

    let reservations: Vec<Reservation> = ReservationCommandService::list(&repo, &paths)
        .unwrap()
        .records
        .unwrap();
    assert_eq!(reservations[0].customer.phone, "123");

    let stored = read_json(&paths.reservations);
    assert_eq!(stored[0]["customer"]["email"], "john@example.com");
    assert_eq!(stored[0]["hotel"]["rooms"], serde_json::json!(["101", "102"]));
}

#[test]
fn reserving_for_unknown_customer_fails() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();
    stock(&repo, &paths);

    let err =
        ReservationCommandService::create(&repo, &paths, "nobody@example.com", "Hotel A", "101")
            .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { kind: "customer", .. }));
    assert!(!paths.reservations.exists());
}

#[test]
fn cancel_without_collection_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();

    let result =
        ReservationCommandService::cancel(&repo, &paths, "john@example.com", "Hotel A", "101")
            .unwrap();
    assert_eq!(result.outcome, DeleteOutcome::CollectionMissing);
    assert!(!paths.reservations.exists());
}

#[test]
fn seed_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let paths = paths_in(&temp_dir);
    let repo = RecordRepository::json();

    let first = SeedCommandService::run(&repo, &paths).unwrap();
    assert_eq!(first.hotel, CreateOutcome::Created);
    assert_eq!(first.customer, CreateOutcome::Created);
    assert_eq!(first.reservation, CreateOutcome::Created);

    let second = SeedCommandService::run(&repo, &paths).unwrap();
    assert_eq!(second.hotel, CreateOutcome::AlreadyExists);
    assert_eq!(second.customer, CreateOutcome::AlreadyExists);
    assert_eq!(second.reservation, CreateOutcome::AlreadyExists);

    let reservations = ReservationCommandService::list(&repo, &paths)
        .unwrap()
        .records
        .unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].hotel.name, "Hotel XYZ");
    assert_eq!(reservations[0].room_number, "101");
}
