//! Timetabling domain models.
//!
//! Provides the reference entities a generation pass reads (rooms, courses,
//! instructors, sections, time slots), the immutable [`Catalog`] that holds
//! them, and the result types it produces ([`Assignment`], [`Timetable`]).
//!
//! # Resource Axes
//!
//! | Axis | Entity | Conflict rule |
//! |------|--------|---------------|
//! | Who teaches | Instructor | one session per slot |
//! | Where | Room | one session per slot |
//! | Who attends | Section | one session per slot |

mod assignment;
mod catalog;
mod course;
mod instructor;
mod room;
mod section;
mod timeslot;
mod timetable;

pub use assignment::{Assignment, SessionType};
pub use catalog::Catalog;
pub use course::Course;
pub use instructor::{Instructor, InstructorRole};
pub use room::Room;
pub use section::{Level, Section, SectionProfile, Specialization};
pub use timeslot::TimeSlot;
pub use timetable::{StaffingGap, Timetable, UnplacedReason, UnplacedSession};
