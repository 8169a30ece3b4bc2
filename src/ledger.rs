//! Assignment ledger and conflict checking.
//!
//! The ledger is the append-only record of committed assignments for one
//! generation pass. Beside the assignment list it keeps one index per
//! resource axis (slot → instructor, slot → room, slot → section), so a
//! candidate is accepted or rejected in constant time.
//!
//! # Invariants
//!
//! Within any slot, each instructor, room and section appears in at most
//! one committed assignment.

use std::collections::HashMap;
use std::fmt;

use crate::models::Assignment;

/// Resource axis on which a candidate collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictAxis {
    Instructor,
    Room,
    Section,
}

/// A rejected candidate: the axis and the committed assignment it hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub axis: ConflictAxis,
    pub slot_id: String,
    /// Index of the blocking assignment in the ledger.
    pub existing: usize,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            ConflictAxis::Instructor => "instructor",
            ConflictAxis::Room => "room",
            ConflictAxis::Section => "section",
        };
        write!(
            f,
            "{axis} already booked in slot '{}' by assignment #{}",
            self.slot_id, self.existing
        )
    }
}

/// slot id → resource id → assignment index.
type SlotIndex = HashMap<String, HashMap<String, usize>>;

fn lookup(index: &SlotIndex, slot_id: &str, resource_id: &str) -> Option<usize> {
    index.get(slot_id).and_then(|m| m.get(resource_id)).copied()
}

fn record(index: &mut SlotIndex, slot_id: &str, resource_id: &str, position: usize) {
    index
        .entry(slot_id.to_string())
        .or_default()
        .insert(resource_id.to_string(), position);
}

/// Committed assignments with per-axis occupancy indexes.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    assignments: Vec<Assignment>,
    instructors: SlotIndex,
    rooms: SlotIndex,
    sections: SlotIndex,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a candidate if it is conflict-free.
    ///
    /// Returns the new assignment's index, or the conflict that blocked it.
    /// A rejected candidate leaves the ledger unchanged.
    pub fn commit(&mut self, candidate: Assignment) -> Result<usize, Conflict> {
        ConflictChecker.check(self, &candidate)?;
        let position = self.assignments.len();
        let slot = candidate.slot_id.as_str();
        record(&mut self.instructors, slot, &candidate.instructor_id, position);
        record(&mut self.rooms, slot, &candidate.room_id, position);
        record(&mut self.sections, slot, &candidate.section_id, position);
        self.assignments.push(candidate);
        Ok(position)
    }

    /// Whether the instructor is booked in the slot.
    pub fn instructor_busy(&self, slot_id: &str, instructor_id: &str) -> bool {
        lookup(&self.instructors, slot_id, instructor_id).is_some()
    }

    /// Whether the room is booked in the slot.
    pub fn room_busy(&self, slot_id: &str, room_id: &str) -> bool {
        lookup(&self.rooms, slot_id, room_id).is_some()
    }

    /// Whether the section is booked in the slot.
    pub fn section_busy(&self, slot_id: &str, section_id: &str) -> bool {
        lookup(&self.sections, slot_id, section_id).is_some()
    }

    /// Committed assignments in commit order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Number of committed assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Consumes the ledger into its assignment list.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}

/// Validates candidates against a ledger. Pure: never mutates the ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictChecker;

impl ConflictChecker {
    /// Rejects the candidate if its slot already holds the same instructor,
    /// room, or section. Axes are checked in that order.
    pub fn check(&self, ledger: &Ledger, candidate: &Assignment) -> Result<(), Conflict> {
        let slot = candidate.slot_id.as_str();
        let axes = [
            (ConflictAxis::Instructor, &ledger.instructors, &candidate.instructor_id),
            (ConflictAxis::Room, &ledger.rooms, &candidate.room_id),
            (ConflictAxis::Section, &ledger.sections, &candidate.section_id),
        ];
        for (axis, index, resource_id) in axes {
            if let Some(existing) = lookup(index, slot, resource_id) {
                return Err(Conflict {
                    axis,
                    slot_id: slot.to_string(),
                    existing,
                });
            }
        }
        Ok(())
    }

    /// Whether the candidate can be committed.
    pub fn is_free(&self, ledger: &Ledger, candidate: &Assignment) -> bool {
        self.check(ledger, candidate).is_ok()
    }
}
