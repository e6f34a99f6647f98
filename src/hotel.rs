// Hotels own their rooms; everything else sees a room through a `RoomHandle`

use crate::error::{require, DomainError, Result};
use crate::room::{Room, RoomDraft, RoomHandle};
use serde::Deserialize;
use std::fmt;

#[derive(Debug)]
pub struct Hotel {
    name: String,
    location: String,
    total_rooms: u32,
    rooms: Vec<RoomHandle>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>, total_rooms: u32) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            total_rooms,
            rooms: Vec::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn get_location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn get_total_rooms(&self) -> u32 {
        self.total_rooms
    }

    pub fn set_total_rooms(&mut self, total_rooms: u32) {
        self.total_rooms = total_rooms;
    }

    pub fn rooms(&self) -> &[RoomHandle] {
        &self.rooms
    }

    /// Takes ownership of `room` and hands back the handle bookings should use.
    /// Room numbers are not checked for duplicates.
    pub fn add_room(&mut self, room: Room) -> RoomHandle {
        tracing::debug!(hotel = %self.name, room = room.get_room_number(), "room added");
        let handle = RoomHandle::new(room);
        self.rooms.push(handle.clone());
        handle
    }

    /// Removes the first entry that is the same room as `room`.
    pub fn remove_room(&mut self, room: &RoomHandle) -> Result<RoomHandle> {
        match self.rooms.iter().position(|owned| owned.ptr_eq(room)) {
            Some(index) => {
                let removed = self.rooms.remove(index);
                tracing::debug!(
                    hotel = %self.name,
                    room = removed.read().get_room_number(),
                    "room removed"
                );
                Ok(removed)
            }
            None => {
                let number = room.read().get_room_number();
                tracing::warn!(hotel = %self.name, room = number, "room to remove not found");
                Err(DomainError::not_found("Room", number))
            }
        }
    }

    pub fn find_room(&self, room_number: u32) -> Option<RoomHandle> {
        self.rooms
            .iter()
            .find(|room| room.read().get_room_number() == room_number)
            .cloned()
    }

    // Available rooms of the given type, in the order they were added
    pub fn search_available_rooms(&self, room_type: &str) -> Vec<RoomHandle> {
        self.rooms
            .iter()
            .filter(|handle| {
                let room = handle.read();
                room.get_type() == room_type && room.is_room_available()
            })
            .cloned()
            .collect()
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hotel {} located in {} with {} rooms.",
            self.name, self.location, self.total_rooms
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HotelDraft {
    pub name: Option<String>,
    pub location: Option<String>,
    pub total_rooms: Option<u32>,
    pub rooms: Vec<RoomDraft>,
}

impl TryFrom<HotelDraft> for Hotel {
    type Error = DomainError;

    fn try_from(draft: HotelDraft) -> Result<Self> {
        let mut hotel = Hotel::new(
            require(draft.name, "Hotel", "name")?,
            require(draft.location, "Hotel", "location")?,
            require(draft.total_rooms, "Hotel", "total_rooms")?,
        );
        for room in draft.rooms {
            hotel.add_room(Room::try_from(room)?);
        }
        Ok(hotel)
    }
}
