//! Entity catalog.
//!
//! Immutable snapshot of the reference data for one generation pass:
//! rooms, courses, instructors, sections and time slots, each kept in
//! loader order with an id index for read-only lookup. Where an id is
//! repeated, lookups resolve to the first record; [`validate_catalog`]
//! reports the duplicate.
//!
//! [`validate_catalog`]: crate::validation::validate_catalog

use std::collections::HashMap;

use super::{Course, Instructor, Room, Section, TimeSlot};

/// Reference data for timetable generation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rooms: Vec<Room>,
    courses: Vec<Course>,
    instructors: Vec<Instructor>,
    sections: Vec<Section>,
    slots: Vec<TimeSlot>,
    room_index: HashMap<String, usize>,
    course_index: HashMap<String, usize>,
    instructor_index: HashMap<String, usize>,
    section_index: HashMap<String, usize>,
    slot_index: HashMap<String, usize>,
}

fn index_of(index: &mut HashMap<String, usize>, id: String, position: usize) {
    index.entry(id).or_insert(position);
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from complete record lists.
    pub fn from_parts(
        rooms: Vec<Room>,
        courses: Vec<Course>,
        instructors: Vec<Instructor>,
        sections: Vec<Section>,
        slots: Vec<TimeSlot>,
    ) -> Self {
        let mut catalog = Self::new();
        for r in rooms {
            catalog.add_room(r);
        }
        for c in courses {
            catalog.add_course(c);
        }
        for i in instructors {
            catalog.add_instructor(i);
        }
        for s in sections {
            catalog.add_section(s);
        }
        for t in slots {
            catalog.add_slot(t);
        }
        catalog
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.add_room(room);
        self
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.add_course(course);
        self
    }

    /// Adds an instructor.
    pub fn with_instructor(mut self, instructor: Instructor) -> Self {
        self.add_instructor(instructor);
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    /// Adds a time slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.add_slot(slot);
        self
    }

    fn add_room(&mut self, room: Room) {
        index_of(&mut self.room_index, room.id(), self.rooms.len());
        self.rooms.push(room);
    }

    fn add_course(&mut self, course: Course) {
        index_of(&mut self.course_index, course.id.clone(), self.courses.len());
        self.courses.push(course);
    }

    fn add_instructor(&mut self, instructor: Instructor) {
        index_of(
            &mut self.instructor_index,
            instructor.id.clone(),
            self.instructors.len(),
        );
        self.instructors.push(instructor);
    }

    fn add_section(&mut self, section: Section) {
        index_of(&mut self.section_index, section.id.clone(), self.sections.len());
        self.sections.push(section);
    }

    fn add_slot(&mut self, slot: TimeSlot) {
        index_of(&mut self.slot_index, slot.id.clone(), self.slots.len());
        self.slots.push(slot);
    }

    /// All rooms in loader order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// All courses in loader order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All instructors in loader order.
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    /// All sections in loader order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All time slots in loader order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Looks up a room by id (`"<building> – <space>"`).
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    /// Looks up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.course_index.get(id).map(|&i| &self.courses[i])
    }

    /// Looks up an instructor by id.
    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructor_index.get(id).map(|&i| &self.instructors[i])
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.section_index.get(id).map(|&i| &self.sections[i])
    }

    /// Looks up a time slot by id.
    pub fn slot(&self, id: &str) -> Option<&TimeSlot> {
        self.slot_index.get(id).map(|&i| &self.slots[i])
    }
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
    fn test_lookup_by_id() {
        let catalog = Catalog::new()
            .with_room(Room::lecture("Hall", "Blue", 150))
            .with_course(Course::new("CSC111").with_lecture())
            .with_instructor(Instructor::professor("P1"))
            .with_section(Section::new("S1_L1", 30))
            .with_slot(slot("T1"));

        assert_eq!(catalog.room("Hall – Blue").map(|r| r.capacity), Some(150));
        assert!(catalog.course("CSC111").is_some());
        assert!(catalog.instructor("P1").is_some());
        assert!(catalog.section("S1_L1").is_some());
        assert!(catalog.slot("T1").is_some());
        assert!(catalog.course("NOPE").is_none());
    }

    #[test]
    fn test_loader_order_preserved() {
        let catalog = Catalog::from_parts(
            vec![],
            vec![],
            vec![
                Instructor::professor("P2"),
                Instructor::professor("P1"),
                Instructor::assistant("A1"),
            ],
            vec![],
            vec![slot("T2"), slot("T1")],
        );
        let ids: Vec<_> = catalog.instructors().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["P2", "P1", "A1"]);
        let slots: Vec<_> = catalog.slots().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(slots, vec!["T2", "T1"]);
    }

    #[test]
    fn test_duplicate_id_resolves_to_first() {
        let catalog = Catalog::new()
            .with_course(Course::new("C1").with_name("first"))
            .with_course(Course::new("C1").with_name("second"));
        assert_eq!(catalog.courses().len(), 2);
        assert_eq!(catalog.course("C1").map(|c| c.name.as_str()), Some("first"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.rooms().is_empty());
        assert!(catalog.sections().is_empty());
        assert!(catalog.room("x").is_none());
    }
}
