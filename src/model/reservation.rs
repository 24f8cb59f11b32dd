use crate::model::{Customer, Entity, Hotel};
use crate::types::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A room booking.
///
/// `customer` and `hotel` are snapshots taken when the reservation was made;
/// later edits to the stored customer or hotel do not reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub customer: Customer,
    pub hotel: Hotel,
    pub room_number: String,
}

/// Natural key of a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservationKey {
    pub customer_email: String,
    pub hotel_name: String,
    pub room_number: String,
}

impl ReservationKey {
    pub fn new(
        customer_email: impl Into<String>,
        hotel_name: impl Into<String>,
        room_number: impl Into<String>,
    ) -> Self {
        Self {
            customer_email: customer_email.into(),
            hotel_name: hotel_name.into(),
            room_number: room_number.into(),
        }
    }
}

impl fmt::Display for ReservationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} room {}",
            self.customer_email, self.hotel_name, self.room_number
        )
    }
}

impl Reservation {
    pub fn new(customer: Customer, hotel: Hotel, room_number: impl Into<String>) -> Self {
        Self {
            customer,
            hotel,
            room_number: room_number.into(),
        }
    }

    pub fn display_info(&self) -> String {
        format!(
            "Reservation for {} at {}, Room {}\n",
            self.customer.name, self.hotel.name, self.room_number
        )
    }
}

impl Entity for Reservation {
    const KIND: &'static str = "reservation";
    type Key = ReservationKey;

    fn key(&self) -> ReservationKey {
        ReservationKey::new(
            self.customer.email.clone(),
            self.hotel.name.clone(),
            self.room_number.clone(),
        )
    }

    fn to_mapping(&self) -> Record {
        let mut mapping = Record::new();
        mapping.insert("customer".to_string(), Value::Object(self.customer.to_mapping()));
        mapping.insert("hotel".to_string(), Value::Object(self.hotel.to_mapping()));
        mapping.insert("room_number".to_string(), Value::String(self.room_number.clone()));
        mapping
    }
}
