//! Room model.
//!
//! Rooms are typed like courses (theory vs lab); the conflict validator
//! rejects assignments that pair a course with a room of the other type.

use serde::{Deserialize, Serialize};

use super::CourseType;

/// Room classification. Shares the course value space so the two can
/// be compared directly.
pub type RoomType = CourseType;

/// A teaching room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room code (e.g. "LH1", "LAB3").
    pub code: String,
    /// Seating capacity (positive).
    pub capacity: u32,
    /// Theory or lab room.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Building name.
    pub building: String,
}

impl Room {
    /// Creates a new room.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        capacity: u32,
        room_type: RoomType,
        building: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            capacity,
            room_type,
            building: building.into(),
        }
    }
}

/// Partial update for a room. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct RoomUpdate {
    /// New room code.
    pub code: Option<String>,
    /// New seating capacity.
    pub capacity: Option<u32>,
    /// New room type.
    pub room_type: Option<RoomType>,
    /// New building name.
    pub building: Option<String>,
}

impl RoomUpdate {
    /// Sets the room code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the room type.
    pub fn with_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Merges the populated fields into `room`.
    pub fn apply(self, room: &mut Room) {
        if let Some(code) = self.code {
            room.code = code;
        }
        if let Some(capacity) = self.capacity {
            room.capacity = capacity;
        }
        if let Some(room_type) = self.room_type {
            room.room_type = room_type;
        }
        if let Some(building) = self.building {
            room.building = building;
        }
    }
}
