//! Session assignment model.
//!
//! An assignment places one session of a course for one section with an
//! instructor, in a room, at a time slot. It is the atomic schedulable unit
//! and is never modified once committed to the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of course session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Lecture,
    Tutorial,
    Lab,
}

impl SessionType {
    /// All session types in default processing order.
    pub const ALL: [SessionType; 3] = [SessionType::Lecture, SessionType::Tutorial, SessionType::Lab];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Lecture => "Lecture",
            SessionType::Tutorial => "Tutorial",
            SessionType::Lab => "Lab",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A committed (or candidate) session placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Section attending.
    pub section_id: String,
    /// Course being taught.
    pub course_id: String,
    /// Teaching instructor (catalog or synthesized).
    pub instructor_id: String,
    /// Room id (`"<building> – <space>"`).
    pub room_id: String,
    /// Time slot id.
    pub slot_id: String,
    /// Session kind.
    pub session_type: SessionType,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        section_id: impl Into<String>,
        course_id: impl Into<String>,
        instructor_id: impl Into<String>,
        room_id: impl Into<String>,
        slot_id: impl Into<String>,
        session_type: SessionType,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            course_id: course_id.into(),
            instructor_id: instructor_id.into(),
            room_id: room_id.into(),
            slot_id: slot_id.into(),
            session_type,
        }
    }
}
