use crate::model::{assign_non_empty, Entity};
use crate::types::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A hotel and the rooms it offers. Keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub rooms: Vec<String>,
}

/// Partial hotel update. Absent or empty fields leave the hotel unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms: Option<Vec<String>>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>, rooms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rooms,
        }
    }

    pub fn has_room(&self, room_number: &str) -> bool {
        self.rooms.iter().any(|room| room == room_number)
    }

    pub fn display_info(&self) -> String {
        let mut out = format!("Hotel Name: {}\nLocation: {}\nRooms:\n", self.name, self.location);
        for room in &self.rooms {
            out.push_str(&format!("- Room {}\n", room));
        }
        out
    }

    pub fn modify_info(&mut self, update: &HotelUpdate) {
        assign_non_empty(&mut self.name, update.name.as_deref());
        assign_non_empty(&mut self.location, update.location.as_deref());
        if let Some(rooms) = &update.rooms {
            if !rooms.is_empty() {
                self.rooms = rooms.clone();
            }
        }
    }
}

impl HotelUpdate {
    /// True when applying the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
            && self.location.as_deref().map_or(true, str::is_empty)
            && self.rooms.as_ref().map_or(true, Vec::is_empty)
    }
}

impl Entity for Hotel {
    const KIND: &'static str = "hotel";
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }

    fn to_mapping(&self) -> Record {
        let mut mapping = Record::new();
        mapping.insert("name".to_string(), Value::String(self.name.clone()));
        mapping.insert("location".to_string(), Value::String(self.location.clone()));
        mapping.insert(
            "rooms".to_string(),
            Value::Array(self.rooms.iter().cloned().map(Value::String).collect()),
        );
        mapping
    }
}
