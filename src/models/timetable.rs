//! Timetable (generation result) model.
//!
//! A timetable is the committed assignment list of one generation pass,
//! plus the diagnostics a complete report needs: staffing gaps that were
//! covered by synthesized instructors, and sessions that could not be
//! placed at all.

use serde::{Deserialize, Serialize};

use super::{Assignment, Catalog, Instructor, InstructorRole, SessionType};

/// The output of a generation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed assignments in commit order.
    pub assignments: Vec<Assignment>,
    /// Distinct staffing gaps, sorted.
    pub staffing_gaps: Vec<StaffingGap>,
    /// Sessions that were requested but not placed, in processing order.
    pub unplaced: Vec<UnplacedSession>,
    /// Instructors synthesized to cover staffing gaps.
    pub fallback_instructors: Vec<Instructor>,
}

/// A (course, session type, role) combination with no qualified instructor.
///
/// Each entry is a real staffing error: the session was taught by a
/// synthesized placeholder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffingGap {
    pub course_id: String,
    pub session_type: SessionType,
    pub required_role: InstructorRole,
}

impl StaffingGap {
    /// Human-readable line for staffing reports.
    pub fn describe(&self) -> String {
        format!(
            "{} ({}) → {}",
            self.course_id, self.session_type, self.required_role
        )
    }
}

/// A requested session that was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplacedSession {
    pub section_id: String,
    pub course_id: String,
    /// `None` when the course itself could not be resolved.
    pub session_type: Option<SessionType>,
    pub reason: UnplacedReason,
}

/// Why a session was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnplacedReason {
    /// The section lists a course id missing from the course catalog.
    UnknownCourse,
    /// No room passes the capacity/type filter for this session.
    NoSuitableRoom,
    /// The slot catalog is empty.
    NoTimeSlots,
    /// Every (instructor, room, slot) candidate conflicts with the ledger.
    AllCandidatesConflict,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether every requested session was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Whether every placed session has a real (catalog) instructor.
    pub fn is_fully_staffed(&self) -> bool {
        self.staffing_gaps.is_empty()
    }

    /// All assignments for a section.
    pub fn assignments_for_section(&self, section_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.section_id == section_id)
            .collect()
    }

    /// All assignments taught by an instructor.
    pub fn assignments_for_instructor(&self, instructor_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.instructor_id == instructor_id)
            .collect()
    }

    /// All assignments held in a room.
    pub fn assignments_for_room(&self, room_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.room_id == room_id)
            .collect()
    }

    /// All assignments in a time slot.
    pub fn assignments_in_slot(&self, slot_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.slot_id == slot_id)
            .collect()
    }

    /// Finds the assignment for one session of a section's course.
    pub fn session(
        &self,
        section_id: &str,
        course_id: &str,
        session_type: SessionType,
    ) -> Option<&Assignment> {
        self.assignments.iter().find(|a| {
            a.section_id == section_id
                && a.course_id == course_id
                && a.session_type == session_type
        })
    }

    /// Resolves an instructor id against the catalog, then the synthesized set.
    pub fn resolve_instructor<'a>(
        &'a self,
        catalog: &'a Catalog,
        instructor_id: &str,
    ) -> Option<&'a Instructor> {
        catalog.instructor(instructor_id).or_else(|| {
            self.fallback_instructors
                .iter()
                .find(|i| i.id == instructor_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.assignments.push(Assignment::new(
            "S1", "C1", "P1", "H – 1", "T1", SessionType::Lecture,
        ));
        t.assignments.push(Assignment::new(
            "S1", "C1", "A1", "H – 2", "T2", SessionType::Tutorial,
        ));
        t.assignments.push(Assignment::new(
            "S2", "C1", "P1", "H – 1", "T2", SessionType::Lecture,
        ));
        t
    }

    #[test]
    fn test_queries() {
        let t = sample_timetable();
        assert_eq!(t.assignment_count(), 3);
        assert_eq!(t.assignments_for_section("S1").len(), 2);
        assert_eq!(t.assignments_for_instructor("P1").len(), 2);
        assert_eq!(t.assignments_for_room("H – 2").len(), 1);
        assert_eq!(t.assignments_in_slot("T2").len(), 2);
        assert_eq!(
            t.session("S1", "C1", SessionType::Tutorial).map(|a| a.slot_id.as_str()),
            Some("T2")
        );
        assert!(t.session("S2", "C1", SessionType::Lab).is_none());
    }

    #[test]
    fn test_completeness_flags() {
        let mut t = sample_timetable();
        assert!(t.is_complete());
        assert!(t.is_fully_staffed());

        t.unplaced.push(UnplacedSession {
            section_id: "S2".into(),
            course_id: "C1".into(),
            session_type: Some(SessionType::Lab),
            reason: UnplacedReason::NoSuitableRoom,
        });
        t.staffing_gaps.push(StaffingGap {
            course_id: "C1".into(),
            session_type: SessionType::Tutorial,
            required_role: InstructorRole::AssistantProfessor,
        });
        assert!(!t.is_complete());
        assert!(!t.is_fully_staffed());
    }

    #[test]
    fn test_resolve_instructor_falls_back_to_synthesized() {
        let catalog = Catalog::new().with_instructor(Instructor::professor("P1"));
        let mut t = Timetable::new();
        t.fallback_instructors
            .push(Instructor::assistant("UNKNOWN_ASSISTANT_PROFESSOR_C1").qualified_for("C1"));

        assert!(t.resolve_instructor(&catalog, "P1").is_some());
        assert!(t
            .resolve_instructor(&catalog, "UNKNOWN_ASSISTANT_PROFESSOR_C1")
            .is_some());
        assert!(t.resolve_instructor(&catalog, "X").is_none());
    }

    #[test]
    fn test_staffing_gap_describe() {
        let gap = StaffingGap {
            course_id: "CSC413".into(),
            session_type: SessionType::Lecture,
            required_role: InstructorRole::AssistantProfessor,
        };
        assert_eq!(gap.describe(), "CSC413 (Lecture) → Assistant Professor");
    }

    #[test]
    fn test_serde_roundtrip() {
        let t = sample_timetable();
        let json = serde_json::to_string(&t).unwrap();
        let back: Timetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.assignments, t.assignments);
    }
}
