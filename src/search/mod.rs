//! Candidate ordering and slot search.
//!
//! A session is placed by walking an ordered sequence of
//! (instructor, room, slot) candidates and committing the first one the
//! ledger accepts. The ordering is pluggable through [`CandidateStrategy`];
//! the conflict rules live in the [`ledger`](crate::ledger) and do not
//! depend on the strategy.
//!
//! # Usage
//!
//! ```
//! use u_timetable::search::{CandidateStrategy, ShuffledFirstFit};
//!
//! let strategy = ShuffledFirstFit::seeded(42);
//! assert_eq!(strategy.name(), "shuffled-first-fit");
//! ```

mod slot;
mod strategy;

pub use slot::{SearchOutcome, SlotSearch};
pub use strategy::{CatalogOrder, ShuffledFirstFit};

use std::fmt::Debug;

use crate::models::{Instructor, Room, TimeSlot};

/// One (instructor, room, slot) placement option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub instructor: &'a Instructor,
    pub room: &'a Room,
    pub slot: &'a TimeSlot,
}

/// The filtered resources a strategy orders.
///
/// Instructors arrive in catalog order, rooms in filter order (lecture
/// rooms largest first), slots in catalog order.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool<'a> {
    pub instructors: Vec<&'a Instructor>,
    pub rooms: Vec<&'a Room>,
    pub slots: Vec<&'a TimeSlot>,
}

impl<'a> CandidatePool<'a> {
    /// Total number of candidate triples.
    pub fn size(&self) -> usize {
        self.instructors.len() * self.rooms.len() * self.slots.len()
    }
}

/// Produces the order in which candidates are tried for one session.
///
/// Strategies are called once per session, strictly in processing order,
/// so a stateful strategy (such as a seeded RNG) is reproducible.
pub trait CandidateStrategy: Debug {
    /// Strategy name for logs.
    fn name(&self) -> &'static str;

    /// Orders the pool's candidates. The first ledger-accepted one is committed.
    fn candidates<'a>(
        &mut self,
        pool: CandidatePool<'a>,
    ) -> Box<dyn Iterator<Item = Candidate<'a>> + 'a>;
}

/// Nested instructor → room → slot enumeration over the pool as given.
pub fn nested<'a>(pool: CandidatePool<'a>) -> impl Iterator<Item = Candidate<'a>> + 'a {
    let CandidatePool {
        instructors,
        rooms,
        slots,
    } = pool;
    instructors.into_iter().flat_map(move |instructor| {
        let slots = slots.clone();
        rooms.clone().into_iter().flat_map(move |room| {
            slots
                .clone()
                .into_iter()
                .map(move |slot| Candidate {
                    instructor,
                    room,
                    slot,
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};

    fn slot(id: &str) -> TimeSlot {
        TimeSlot::new(
            id,
            Weekday::Sun,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_nested_order() {
        let instructors = [Instructor::professor("P1"), Instructor::professor("P2")];
        let rooms = [Room::lecture("H", "1", 10), Room::lecture("H", "2", 10)];
        let slots = [slot("T1"), slot("T2")];
        let pool = CandidatePool {
            instructors: instructors.iter().collect(),
            rooms: rooms.iter().collect(),
            slots: slots.iter().collect(),
        };
        assert_eq!(pool.size(), 8);

        let order: Vec<String> = nested(pool)
            .map(|c| format!("{}/{}/{}", c.instructor.id, c.room.space, c.slot.id))
            .collect();
        assert_eq!(
            order,
            vec![
                "P1/1/T1", "P1/1/T2", "P1/2/T1", "P1/2/T2", "P2/1/T1", "P2/1/T2", "P2/2/T1",
                "P2/2/T2",
            ]
        );
    }

    #[test]
    fn test_nested_empty_axis() {
        let instructors = [Instructor::professor("P1")];
        let pool = CandidatePool {
            instructors: instructors.iter().collect(),
            rooms: Vec::new(),
            slots: Vec::new(),
        };
        assert_eq!(nested(pool).count(), 0);
    }
}
