//! Room model.
//!
//! A room is a teaching space identified by its building and space name.
//! Capacity is compared against section size, and the room type decides
//! which session types may use it.

use serde::{Deserialize, Serialize};

/// A teaching space that sessions can be placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Building name.
    pub building: String,
    /// Space (room number or name) within the building.
    pub space: String,
    /// Seat count.
    pub capacity: u32,
    /// Free-text room type from the facilities list (e.g. "Lecture", "Computer Lab").
    pub room_type: String,
}

impl Room {
    /// Creates a room. Building, space and type are trimmed.
    pub fn new(
        building: impl Into<String>,
        space: impl Into<String>,
        capacity: u32,
        room_type: impl Into<String>,
    ) -> Self {
        Self {
            building: building.into().trim().to_string(),
            space: space.into().trim().to_string(),
            capacity,
            room_type: room_type.into().trim().to_string(),
        }
    }

    /// Creates a lecture hall.
    pub fn lecture(building: impl Into<String>, space: impl Into<String>, capacity: u32) -> Self {
        Self::new(building, space, capacity, "Lecture")
    }

    /// Creates a lab room.
    pub fn lab(building: impl Into<String>, space: impl Into<String>, capacity: u32) -> Self {
        Self::new(building, space, capacity, "Lab")
    }

    /// Unique room identifier: `"<building> – <space>"`.
    pub fn id(&self) -> String {
        format!("{} – {}", self.building, self.space)
    }

    /// Whether this is a lab-typed room (type mentions "Lab").
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.room_type.contains("Lab")
    }

    /// Whether the room seats `student_count` students.
    #[inline]
    pub fn can_hold(&self, student_count: u32) -> bool {
        self.capacity >= student_count
    }
}
