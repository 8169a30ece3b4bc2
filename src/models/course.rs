//! Course model.
//!
//! The session flags decide which sessions a section taking the course
//! needs: one Lecture, one Tutorial, and/or one Lab.

use serde::{Deserialize, Serialize};

use super::SessionType;

/// A course offered to sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (e.g. "CSC111").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Credit hours.
    pub credits: u32,
    /// Requires a Lecture session.
    pub has_lecture: bool,
    /// Requires a Tutorial session.
    pub has_tutorial: bool,
    /// Requires a Lab session.
    pub has_lab: bool,
}

impl Course {
    /// Creates a course with no sessions and 3 credits.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            credits: 3,
            has_lecture: false,
            has_tutorial: false,
            has_lab: false,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit hours.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Requires a Lecture session.
    pub fn with_lecture(mut self) -> Self {
        self.has_lecture = true;
        self
    }

    /// Requires a Tutorial session.
    pub fn with_tutorial(mut self) -> Self {
        self.has_tutorial = true;
        self
    }

    /// Requires a Lab session.
    pub fn with_lab(mut self) -> Self {
        self.has_lab = true;
        self
    }

    /// Whether the course needs a session of the given type.
    pub fn requires(&self, session_type: SessionType) -> bool {
        match session_type {
            SessionType::Lecture => self.has_lecture,
            SessionType::Tutorial => self.has_tutorial,
            SessionType::Lab => self.has_lab,
        }
    }

    /// Session types this course needs, in the given processing order.
    pub fn sessions_in<'a>(
        &'a self,
        order: &'a [SessionType],
    ) -> impl Iterator<Item = SessionType> + 'a {
        order.iter().copied().filter(|&s| self.requires(s))
    }
}
