//! Reservation command service.
//!
//! A reservation copies the stored customer and hotel at booking time.

use crate::commands::{CreateResult, DeleteResult, ListResult};
use crate::config::CollectionPaths;
use crate::error::ApiError;
use crate::model::{Customer, Hotel, Reservation, ReservationKey};
use crate::repository::RecordRepository;
use crate::store::RecordStore;

pub struct ReservationCommandService;

impl ReservationCommandService {
    /// Book `room_number` at `hotel_name` for the customer with `email`.
    ///
    /// Both the customer and the hotel must already be stored.
    pub fn create<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        email: &str,
        hotel_name: &str,
        room_number: &str,
    ) -> Result<CreateResult<Reservation>, ApiError> {
        let customer: Customer = repo.get_or_error(&email.to_string(), &paths.customers)?;
        let hotel: Hotel = repo.get_or_error(&hotel_name.to_string(), &paths.hotels)?;
        Self::create_from_snapshots(repo, paths, customer, hotel, room_number)
    }

    /// Store a reservation built from the given snapshots without looking them up.
    pub fn create_from_snapshots<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        customer: Customer,
        hotel: Hotel,
        room_number: &str,
    ) -> Result<CreateResult<Reservation>, ApiError> {
        if !hotel.has_room(room_number) {
            tracing::warn!(
                hotel = %hotel.name,
                room = room_number,
                "Room is not listed for this hotel"
            );
        }

        let reservation = Reservation::new(customer, hotel, room_number);
        let outcome = repo.create(&reservation, &paths.reservations)?;
        Ok(CreateResult {
            record: reservation,
            outcome,
            path: paths.reservations.clone(),
        })
    }

    /// Remove the reservations matching the customer email, hotel name and room.
    pub fn cancel<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
        email: &str,
        hotel_name: &str,
        room_number: &str,
    ) -> Result<DeleteResult, ApiError> {
        let key = ReservationKey::new(email, hotel_name, room_number);
        let outcome = repo.delete::<Reservation>(&key, &paths.reservations)?;
        Ok(DeleteResult {
            key: key.to_string(),
            outcome,
            path: paths.reservations.clone(),
        })
    }

    pub fn list<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
    ) -> Result<ListResult<Reservation>, ApiError> {
        Ok(ListResult {
            records: repo.list(&paths.reservations)?,
            path: paths.reservations.clone(),
        })
    }
}
