//! Sample data insertion.

use crate::commands::{CustomerCommandService, HotelCommandService, ReservationCommandService};
use crate::config::CollectionPaths;
use crate::error::ApiError;
use crate::model::{Customer, Hotel};
use crate::repository::{CreateOutcome, RecordRepository};
use crate::store::RecordStore;
use serde::Serialize;

pub const SAMPLE_HOTEL_NAME: &str = "Hotel XYZ";
pub const SAMPLE_HOTEL_LOCATION: &str = "City A";
pub const SAMPLE_ROOMS: [&str; 3] = ["101", "102", "103"];
pub const SAMPLE_CUSTOMER_NAME: &str = "John Doe";
pub const SAMPLE_CUSTOMER_EMAIL: &str = "john@example.com";
pub const SAMPLE_CUSTOMER_PHONE: &str = "123-456-7890";
pub const SAMPLE_ROOM: &str = "101";

/// Outcome of each insert performed by `seed`.
#[derive(Debug, Clone, Serialize)]
pub struct SeedResult {
    pub hotel: CreateOutcome,
    pub customer: CreateOutcome,
    pub reservation: CreateOutcome,
}

pub struct SeedCommandService;

impl SeedCommandService {
    /// Insert one hotel, one customer and a reservation of room 101 for them.
    /// Safe to run repeatedly: existing records are skipped.
    pub fn run<S: RecordStore>(
        repo: &RecordRepository<S>,
        paths: &CollectionPaths,
    ) -> Result<SeedResult, ApiError> {
        let rooms = SAMPLE_ROOMS.iter().map(|r| r.to_string()).collect();
        let hotel = HotelCommandService::create(
            repo,
            paths,
            SAMPLE_HOTEL_NAME,
            SAMPLE_HOTEL_LOCATION,
            rooms,
        )?;
        let customer = CustomerCommandService::create(
            repo,
            paths,
            SAMPLE_CUSTOMER_NAME,
            SAMPLE_CUSTOMER_EMAIL,
            SAMPLE_CUSTOMER_PHONE,
        )?;

        // The reservation embeds the sample values, not whatever is stored
        // under those keys.
        let reservation = ReservationCommandService::create_from_snapshots(
            repo,
            paths,
            Customer::new(SAMPLE_CUSTOMER_NAME, SAMPLE_CUSTOMER_EMAIL, SAMPLE_CUSTOMER_PHONE),
            Hotel::new(
                SAMPLE_HOTEL_NAME,
                SAMPLE_HOTEL_LOCATION,
                SAMPLE_ROOMS.iter().map(|r| r.to_string()).collect(),
            ),
            SAMPLE_ROOM,
        )?;

        Ok(SeedResult {
            hotel: hotel.outcome,
            customer: customer.outcome,
            reservation: reservation.outcome,
        })
    }
}
