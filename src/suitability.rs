//! Room suitability.
//!
//! Filters rooms by seat count and type for a session:
//!
//! | Session | Room rule |
//! |---------|-----------|
//! | Lab | lab-typed, seats the section |
//! | Tutorial | at most `tutorial_room_capacity_limit` seats, seats the section |
//! | Lecture | not lab-typed, seats the section; largest first |

use crate::config::{GeneratorConfig, DEFAULT_TUTORIAL_ROOM_CAPACITY_LIMIT};
use crate::models::{Room, SessionType};

/// Room filter for session placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomFilter {
    tutorial_capacity_limit: u32,
}

impl Default for RoomFilter {
    fn default() -> Self {
        Self::new(DEFAULT_TUTORIAL_ROOM_CAPACITY_LIMIT)
    }
}

impl RoomFilter {
    /// Creates a filter with the given tutorial room limit.
    pub fn new(tutorial_capacity_limit: u32) -> Self {
        Self {
            tutorial_capacity_limit,
        }
    }

    /// Builds the filter from generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.tutorial_room_capacity_limit)
    }

    /// Whether one room may host a session for `student_count` students.
    pub fn accepts(&self, room: &Room, session_type: SessionType, student_count: u32) -> bool {
        if !room.can_hold(student_count) {
            return false;
        }
        match session_type {
            SessionType::Lab => room.is_lab(),
            SessionType::Tutorial => room.capacity <= self.tutorial_capacity_limit,
            SessionType::Lecture => !room.is_lab(),
        }
    }

    /// Suitable rooms in catalog order; lecture rooms sorted by capacity,
    /// largest first (stable).
    pub fn suitable<'a>(
        &self,
        rooms: &'a [Room],
        session_type: SessionType,
        student_count: u32,
    ) -> Vec<&'a Room> {
        let mut suitable: Vec<&'a Room> = rooms
            .iter()
            .filter(|r| self.accepts(r, session_type, student_count))
            .collect();
        if session_type == SessionType::Lecture {
            suitable.sort_by(|a, b| b.capacity.cmp(&a.capacity));
        }
        suitable
    }
}
