// Rooms and their availability flag

use crate::error::{require, Result};
use crate::shared::Shared;
use serde::Deserialize;
use std::fmt;

pub type RoomHandle = Shared<Room>;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    room_number: u32,
    room_type: String,
    amenities: Vec<String>,
    price_per_night: f64,
    is_available: bool,
}

impl Room {
    pub fn new(
        room_number: u32,
        room_type: impl Into<String>,
        price_per_night: f64,
        is_available: bool,
    ) -> Self {
        Self {
            room_number,
            room_type: room_type.into(),
            amenities: Vec::new(),
            price_per_night,
            is_available,
        }
    }

    pub fn get_room_number(&self) -> u32 {
        self.room_number
    }

    pub fn set_room_number(&mut self, room_number: u32) {
        self.room_number = room_number;
    }

    pub fn get_type(&self) -> &str {
        &self.room_type
    }

    pub fn set_type(&mut self, room_type: impl Into<String>) {
        self.room_type = room_type.into();
    }

    pub fn get_amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn set_amenities(&mut self, amenities: Vec<String>) {
        self.amenities = amenities;
    }

    pub fn get_price_per_night(&self) -> f64 {
        self.price_per_night
    }

    pub fn set_price_per_night(&mut self, price: f64) {
        self.price_per_night = price;
    }

    pub fn is_room_available(&self) -> bool {
        self.is_available
    }

    pub fn set_availability(&mut self, status: bool) {
        self.is_available = status;
    }

    /// Marks the room as taken. Booking an already taken room leaves it as it is.
    pub fn book_room(&mut self) {
        if self.is_available {
            self.is_available = false;
            tracing::debug!(room = self.room_number, "room booked");
        }
    }

    pub fn checkout(&mut self) {
        self.is_available = true;
        tracing::debug!(room = self.room_number, "room checked out");
    }
}

// Prices print through f64's Debug form so whole amounts keep their `.0`. Very large or
// small values use Rust's exponent style (`1e16`), not Python's (`1e+16`).
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}) - ${:?} per night. Available: {}",
            self.room_number,
            self.room_type,
            self.price_per_night,
            if self.is_available { "True" } else { "False" }
        )
    }
}

// Named-field construction, e.g. from a JSON inventory
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomDraft {
    pub room_number: Option<u32>,
    pub room_type: Option<String>,
    pub amenities: Vec<String>,
    pub price_per_night: Option<f64>,
    pub is_available: Option<bool>,
}

impl TryFrom<RoomDraft> for Room {
    type Error = crate::DomainError;

    fn try_from(draft: RoomDraft) -> Result<Self> {
        let mut room = Room::new(
            require(draft.room_number, "Room", "room_number")?,
            require(draft.room_type, "Room", "room_type")?,
            require(draft.price_per_night, "Room", "price_per_night")?,
            require(draft.is_available, "Room", "is_available")?,
        );
        room.set_amenities(draft.amenities);
        Ok(room)
    }
}
