//! Instructor model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Academic role of an instructor. Gates which session types they may teach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InstructorRole {
    /// Teaches lectures.
    Professor,
    /// Teaches tutorials and labs (and override-listed courses).
    AssistantProfessor,
}

impl InstructorRole {
    /// Upper-snake code used in synthesized instructor ids.
    pub fn code(&self) -> &'static str {
        match self {
            InstructorRole::Professor => "PROFESSOR",
            InstructorRole::AssistantProfessor => "ASSISTANT_PROFESSOR",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            InstructorRole::Professor => "Professor",
            InstructorRole::AssistantProfessor => "Assistant Professor",
        }
    }
}

impl fmt::Display for InstructorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A teaching staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Academic role.
    pub role: InstructorRole,
    /// Free-text preferred teaching times. Informational; not enforced.
    pub preferred_slots: String,
    /// Course ids this instructor is qualified to teach.
    pub qualified_courses: BTreeSet<String>,
}

impl Instructor {
    /// Creates an instructor with no qualifications.
    pub fn new(id: impl Into<String>, role: InstructorRole) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            preferred_slots: "Any time".to_string(),
            qualified_courses: BTreeSet::new(),
        }
    }

    /// Creates a professor.
    pub fn professor(id: impl Into<String>) -> Self {
        Self::new(id, InstructorRole::Professor)
    }

    /// Creates an assistant professor.
    pub fn assistant(id: impl Into<String>) -> Self {
        Self::new(id, InstructorRole::AssistantProfessor)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the preferred slots text.
    pub fn with_preferred_slots(mut self, slots: impl Into<String>) -> Self {
        self.preferred_slots = slots.into();
        self
    }

    /// Adds a qualified course.
    pub fn qualified_for(mut self, course_id: impl Into<String>) -> Self {
        self.qualified_courses.insert(course_id.into());
        self
    }

    /// Whether the instructor may teach the course.
    #[inline]
    pub fn can_teach(&self, course_id: &str) -> bool {
        self.qualified_courses.contains(course_id)
    }
}
