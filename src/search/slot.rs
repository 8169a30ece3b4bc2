//! Slot search for a single session.
//!
//! # Algorithm
//!
//! 1. Filter rooms for the session type and section size.
//! 2. Hand instructors, rooms and slots to the candidate strategy.
//! 3. Walk the candidates in order; commit the first one the ledger accepts.
//! 4. If none is accepted, the session is dropped. Earlier commits are
//!    never revisited.
//!
//! # Complexity
//! O(i * r * s) ledger probes in the worst case, each O(1).

use tracing::{debug, trace};

use super::{CandidatePool, CandidateStrategy};
use crate::ledger::Ledger;
use crate::models::{Assignment, Instructor, Room, Section, SessionType, TimeSlot};
use crate::suitability::RoomFilter;

/// Result of searching for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Committed at this ledger index.
    Placed(usize),
    /// The room filter left nothing.
    NoSuitableRoom,
    /// The slot catalog is empty.
    NoTimeSlots,
    /// Every candidate was rejected by the ledger.
    Exhausted { rejected: usize },
}

impl SearchOutcome {
    /// Whether the session was committed.
    pub fn is_placed(&self) -> bool {
        matches!(self, SearchOutcome::Placed(_))
    }
}

/// Places sessions one at a time into a ledger.
#[derive(Debug)]
pub struct SlotSearch<'s> {
    filter: RoomFilter,
    strategy: &'s mut dyn CandidateStrategy,
}

impl<'s> SlotSearch<'s> {
    /// Creates a search with the given room filter and candidate ordering.
    pub fn new(filter: RoomFilter, strategy: &'s mut dyn CandidateStrategy) -> Self {
        Self { filter, strategy }
    }

    /// Searches for a conflict-free placement of one session.
    ///
    /// `instructors` must already be the eligible set for the session, in
    /// the order they should be tried.
    #[allow(clippy::too_many_arguments)]
    pub fn place(
        &mut self,
        ledger: &mut Ledger,
        section: &Section,
        course_id: &str,
        session_type: SessionType,
        instructors: Vec<&Instructor>,
        rooms: &[Room],
        slots: &[TimeSlot],
    ) -> SearchOutcome {
        let suitable = self.filter.suitable(rooms, session_type, section.student_count);
        if suitable.is_empty() {
            return SearchOutcome::NoSuitableRoom;
        }
        if slots.is_empty() {
            return SearchOutcome::NoTimeSlots;
        }

        let pool = CandidatePool {
            instructors,
            rooms: suitable,
            slots: slots.iter().collect(),
        };

        let mut rejected = 0;
        for candidate in self.strategy.candidates(pool) {
            let assignment = Assignment::new(
                section.id.as_str(),
                course_id,
                candidate.instructor.id.as_str(),
                candidate.room.id(),
                candidate.slot.id.as_str(),
                session_type,
            );
            match ledger.commit(assignment) {
                Ok(index) => {
                    debug!(
                        section = %section.id,
                        course = course_id,
                        session = %session_type,
                        instructor = %candidate.instructor.id,
                        room = %candidate.room.id(),
                        slot = %candidate.slot.id,
                        "session placed"
                    );
                    return SearchOutcome::Placed(index);
                }
                Err(conflict) => {
                    trace!(%conflict, "candidate rejected");
                    rejected += 1;
                }
            }
        }
        SearchOutcome::Exhausted { rejected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::CatalogOrder;
    use chrono::{NaiveTime, Weekday};

    fn slot(id: &str) -> TimeSlot {
        TimeSlot::new(
            id,
            Weekday::Mon,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_places_first_free_candidate() {
        let mut strategy = CatalogOrder;
        let mut search = SlotSearch::new(RoomFilter::default(), &mut strategy);
        let mut ledger = Ledger::new();
        let section = Section::new("S1", 30);
        let prof = Instructor::professor("P1").qualified_for("C1");
        let rooms = [Room::lecture("H", "1", 40)];
        let slots = [slot("T1"), slot("T2")];

        let first = search.place(&mut ledger, &section, "C1", SessionType::Lecture, vec![&prof], &rooms, &slots);
        assert_eq!(first, SearchOutcome::Placed(0));
        assert_eq!(ledger.assignments()[0].slot_id, "T1");

        // Same section again: T1 is taken, so T2.
        let second = search.place(&mut ledger, &section, "C1", SessionType::Lecture, vec![&prof], &rooms, &slots);
        assert_eq!(second, SearchOutcome::Placed(1));
        assert_eq!(ledger.assignments()[1].slot_id, "T2");
        assert_eq!(ledger.assignments()[1].room_id, "H – 1");
    }

    #[test]
    fn test_exhausted_when_all_conflict() {
        let mut strategy = CatalogOrder;
        let mut search = SlotSearch::new(RoomFilter::default(), &mut strategy);
        let mut ledger = Ledger::new();
        let section = Section::new("S1", 30);
        let prof = Instructor::professor("P1");
        let rooms = [Room::lecture("H", "1", 40)];
        let slots = [slot("T1")];

        assert!(search
            .place(&mut ledger, &section, "C1", SessionType::Lecture, vec![&prof], &rooms, &slots)
            .is_placed());
        let outcome = search.place(&mut ledger, &section, "C2", SessionType::Lecture, vec![&prof], &rooms, &slots);
        assert_eq!(outcome, SearchOutcome::Exhausted { rejected: 1 });
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_no_suitable_room() {
        let mut strategy = CatalogOrder;
        let mut search = SlotSearch::new(RoomFilter::default(), &mut strategy);
        let mut ledger = Ledger::new();
        let section = Section::new("S1", 30);
        let asst = Instructor::assistant("A1");
        let rooms = [Room::lecture("H", "1", 40)];

        let outcome = search.place(&mut ledger, &section, "C1", SessionType::Lab, vec![&asst], &rooms, &[slot("T1")]);
        assert_eq!(outcome, SearchOutcome::NoSuitableRoom);
    }

    #[test]
    fn test_no_time_slots() {
        let mut strategy = CatalogOrder;
        let mut search = SlotSearch::new(RoomFilter::default(), &mut strategy);
        let mut ledger = Ledger::new();
        let section = Section::new("S1", 30);
        let prof = Instructor::professor("P1");
        let rooms = [Room::lecture("H", "1", 40)];

        let outcome = search.place(&mut ledger, &section, "C1", SessionType::Lecture, vec![&prof], &rooms, &[]);
        assert_eq!(outcome, SearchOutcome::NoTimeSlots);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_falls_through_to_second_instructor() {
        let mut strategy = CatalogOrder;
        let mut search = SlotSearch::new(RoomFilter::default(), &mut strategy);
        let mut ledger = Ledger::new();
        let p1 = Instructor::professor("P1");
        let p2 = Instructor::professor("P2");
        let rooms = [Room::lecture("H", "1", 40), Room::lecture("H", "2", 40)];
        let slots = [slot("T1")];

        search.place(&mut ledger, &Section::new("S1", 10), "C1", SessionType::Lecture, vec![&p1], &rooms, &slots);
        let outcome = search.place(&mut ledger, &Section::new("S2", 10), "C1", SessionType::Lecture, vec![&p1, &p2], &rooms, &slots);
        assert_eq!(outcome, SearchOutcome::Placed(1));
        assert_eq!(ledger.assignments()[1].instructor_id, "P2");
    }
}
