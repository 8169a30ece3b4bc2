//! Catalog validation.
//!
//! Checks structural integrity of the reference data before generation.
//! Detects:
//! - Duplicate IDs
//! - Section or instructor references to unknown courses
//! - Sections without courses
//! - Rooms without seats
//! - Courses that need no session
//!
//! Validation is advisory: generation tolerates every issue reported here
//! (unknown courses are skipped and reported on the timetable), but a
//! loader should surface these to whoever maintains the data.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A section or instructor references a course that doesn't exist.
    UnknownCourseReference,
    /// A section has no courses.
    EmptySection,
    /// A room has zero capacity.
    ZeroCapacity,
    /// A course requires no session type.
    NoSessions,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_unique(
    kind: &str,
    ids: impl Iterator<Item = String>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {kind} ID: {id}"),
            ));
        }
    }
}

/// Validates a catalog.
///
/// Checks:
/// 1. No duplicate room, course, instructor, section, or slot IDs
/// 2. Every section lists at least one course
/// 3. Every course a section lists exists
/// 4. Every course an instructor is qualified for exists
/// 5. Every room has at least one seat
/// 6. Every course requires at least one session type
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique("room", catalog.rooms().iter().map(|r| r.id()), &mut errors);
    check_unique("course", catalog.courses().iter().map(|c| c.id.clone()), &mut errors);
    check_unique(
        "instructor",
        catalog.instructors().iter().map(|i| i.id.clone()),
        &mut errors,
    );
    check_unique(
        "section",
        catalog.sections().iter().map(|s| s.id.clone()),
        &mut errors,
    );
    check_unique("slot", catalog.slots().iter().map(|t| t.id.clone()), &mut errors);

    for section in catalog.sections() {
        if section.courses.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySection,
                format!("Section '{}' has no courses", section.id),
            ));
        }
        for course_id in &section.courses {
            if catalog.course(course_id).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourseReference,
                    format!(
                        "Section '{}' references unknown course '{}'",
                        section.id, course_id
                    ),
                ));
            }
        }
    }

    for instructor in catalog.instructors() {
        for course_id in &instructor.qualified_courses {
            if catalog.course(course_id).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourseReference,
                    format!(
                        "Instructor '{}' is qualified for unknown course '{}'",
                        instructor.id, course_id
                    ),
                ));
            }
        }
    }

    for room in catalog.rooms() {
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Room '{}' has no seats", room.id()),
            ));
        }
    }

    for course in catalog.courses() {
        if !(course.has_lecture || course.has_tutorial || course.has_lab) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSessions,
                format!("Course '{}' requires no sessions", course.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
