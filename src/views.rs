//! Read-only timetable views for presentation layers.
//!
//! Groups a timetable's assignments by weekday and orders them by start
//! time, resolving ids to catalog entities. Renderers (HTML, PDF, API)
//! consume these instead of re-deriving the grouping.
//!
//! Every weekday that has at least one catalog slot gets a [`DayAgenda`],
//! even when empty, so a renderer can show free days.

use std::collections::BTreeMap;

use chrono::Weekday;

use crate::models::{
    Assignment, Catalog, Course, Instructor, InstructorRole, Room, Section, TimeSlot, Timetable,
};

/// One assignment with its entities resolved.
#[derive(Debug, Clone, Copy)]
pub struct AgendaEntry<'a> {
    pub assignment: &'a Assignment,
    pub slot: &'a TimeSlot,
    pub course: Option<&'a Course>,
    pub instructor: Option<&'a Instructor>,
    pub room: Option<&'a Room>,
}

/// Assignments on one weekday, by start time.
#[derive(Debug, Clone)]
pub struct DayAgenda<'a> {
    pub day: Weekday,
    pub entries: Vec<AgendaEntry<'a>>,
}

impl DayAgenda<'_> {
    /// Whether nothing is scheduled that day.
    pub fn is_free(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Weekly agenda of a section.
pub fn section_agenda<'a>(
    timetable: &'a Timetable,
    catalog: &'a Catalog,
    section_id: &str,
) -> Vec<DayAgenda<'a>> {
    agenda(timetable, catalog, |a| a.section_id == section_id)
}

/// Weekly agenda of an instructor (catalog or placeholder).
pub fn instructor_agenda<'a>(
    timetable: &'a Timetable,
    catalog: &'a Catalog,
    instructor_id: &str,
) -> Vec<DayAgenda<'a>> {
    agenda(timetable, catalog, |a| a.instructor_id == instructor_id)
}

/// Weekly agenda of a room.
pub fn room_agenda<'a>(
    timetable: &'a Timetable,
    catalog: &'a Catalog,
    room_id: &str,
) -> Vec<DayAgenda<'a>> {
    agenda(timetable, catalog, |a| a.room_id == room_id)
}

fn agenda<'a>(
    timetable: &'a Timetable,
    catalog: &'a Catalog,
    keep: impl Fn(&Assignment) -> bool,
) -> Vec<DayAgenda<'a>> {
    let mut days: BTreeMap<u32, DayAgenda<'a>> = BTreeMap::new();
    for slot in catalog.slots() {
        days.entry(slot.day.num_days_from_sunday())
            .or_insert_with(|| DayAgenda {
                day: slot.day,
                entries: Vec::new(),
            });
    }

    for assignment in timetable.assignments.iter().filter(|a| keep(a)) {
        let Some(slot) = catalog.slot(&assignment.slot_id) else {
            continue;
        };
        let entry = AgendaEntry {
            assignment,
            slot,
            course: catalog.course(&assignment.course_id),
            instructor: timetable.resolve_instructor(catalog, &assignment.instructor_id),
            room: catalog.room(&assignment.room_id),
        };
        if let Some(day) = days.get_mut(&slot.day.num_days_from_sunday()) {
            day.entries.push(entry);
        }
    }

    let mut out: Vec<DayAgenda<'a>> = days.into_values().collect();
    for day in &mut out {
        day.entries.sort_by_key(|e| e.slot.start);
    }
    out
}

/// Sections ordered by level, track, then section number.
pub fn sections_in_display_order(catalog: &Catalog) -> Vec<&Section> {
    let mut sections: Vec<&Section> = catalog.sections().iter().collect();
    sections.sort_by_key(|s| s.display_key());
    sections
}

/// Instructors of one role with their session count, sorted by name then id.
///
/// Includes placeholders synthesized for that role.
pub fn instructors_by_role<'a>(
    timetable: &'a Timetable,
    catalog: &'a Catalog,
    role: InstructorRole,
) -> Vec<(&'a Instructor, usize)> {
    let mut load: BTreeMap<&str, usize> = BTreeMap::new();
    for a in &timetable.assignments {
        *load.entry(a.instructor_id.as_str()).or_insert(0) += 1;
    }

    let mut listed: Vec<(&'a Instructor, usize)> = catalog
        .instructors()
        .iter()
        .chain(timetable.fallback_instructors.iter())
        .filter(|i| i.role == role)
        .map(|i| (i, load.get(i.id.as_str()).copied().unwrap_or(0)))
        .collect();
    listed.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    listed
}

/// Rooms grouped by building (sorted), each group sorted by space.
pub fn rooms_by_building(catalog: &Catalog) -> BTreeMap<&str, Vec<&Room>> {
    let mut grouped: BTreeMap<&str, Vec<&Room>> = BTreeMap::new();
    for room in catalog.rooms() {
        grouped.entry(room.building.as_str()).or_default().push(room);
    }
    for rooms in grouped.values_mut() {
        rooms.sort_by(|a, b| a.space.cmp(&b.space));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionType;
    use chrono::NaiveTime;

    fn slot(id: &str, day: Weekday, hour: u32) -> TimeSlot {
        TimeSlot::new(
            id,
            day,
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
        )
    }

    fn fixture() -> (Catalog, Timetable) {
        let catalog = Catalog::new()
            .with_room(Room::lecture("B2", "201", 60))
            .with_room(Room::lecture("B1", "102", 60))
            .with_room(Room::lecture("B1", "101", 60))
            .with_course(Course::new("C1").with_name("Algorithms").with_lecture())
            .with_instructor(Instructor::professor("P2").with_name("Zaki"))
            .with_instructor(Instructor::professor("P1").with_name("Amal"))
            .with_instructor(Instructor::assistant("A1").with_name("Omar"))
            .with_section(Section::new("S2_L2", 30).with_inferred_profile())
            .with_section(Section::new("S1_L1", 30).with_inferred_profile())
            .with_slot(slot("MON-2", Weekday::Mon, 13))
            .with_slot(slot("SUN-2", Weekday::Sun, 11))
            .with_slot(slot("SUN-1", Weekday::Sun, 9))
            .with_slot(slot("TUE-1", Weekday::Tue, 9));

        let mut timetable = Timetable::new();
        for (slot_id, room) in [("SUN-2", "B1 – 101"), ("SUN-1", "B1 – 102"), ("MON-2", "B1 – 101")] {
            timetable.assignments.push(Assignment::new(
                "S1_L1",
                "C1",
                "P1",
                room,
                slot_id,
                SessionType::Lecture,
            ));
        }
        timetable.fallback_instructors.push(
            Instructor::professor("UNKNOWN_PROFESSOR_C1").with_name("Unknown Instructor"),
        );
        (catalog, timetable)
    }

    #[test]
    fn test_section_agenda_grouped_and_sorted() {
        let (catalog, timetable) = fixture();
        let days = section_agenda(&timetable, &catalog, "S1_L1");

        let names: Vec<_> = days.iter().map(|d| d.day).collect();
        assert_eq!(names, vec![Weekday::Sun, Weekday::Mon, Weekday::Tue]);

        let sunday: Vec<_> = days[0].entries.iter().map(|e| e.slot.id.as_str()).collect();
        assert_eq!(sunday, vec!["SUN-1", "SUN-2"]);
        assert_eq!(days[1].entries.len(), 1);
        assert!(days[2].is_free());

        let entry = &days[0].entries[0];
        assert_eq!(entry.course.map(|c| c.name.as_str()), Some("Algorithms"));
        assert_eq!(entry.instructor.map(|i| i.name.as_str()), Some("Amal"));
        assert_eq!(entry.room.map(|r| r.space.as_str()), Some("102"));
    }

    #[test]
    fn test_room_and_instructor_agenda() {
        let (catalog, timetable) = fixture();
        let room_days = room_agenda(&timetable, &catalog, "B1 – 101");
        let total: usize = room_days.iter().map(|d| d.entries.len()).sum();
        assert_eq!(total, 2);

        let idle = instructor_agenda(&timetable, &catalog, "P2");
        assert!(idle.iter().all(DayAgenda::is_free));
    }

    #[test]
    fn test_sections_in_display_order() {
        let (catalog, _) = fixture();
        let ids: Vec<_> = sections_in_display_order(&catalog)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["S1_L1", "S2_L2"]);
    }

    #[test]
    fn test_instructors_by_role() {
        let (catalog, timetable) = fixture();
        let profs = instructors_by_role(&timetable, &catalog, InstructorRole::Professor);
        let listed: Vec<_> = profs.iter().map(|(i, n)| (i.id.as_str(), *n)).collect();
        assert_eq!(
            listed,
            vec![("P1", 3), ("UNKNOWN_PROFESSOR_C1", 0), ("P2", 0)]
        );

        let assistants = instructors_by_role(&timetable, &catalog, InstructorRole::AssistantProfessor);
        assert_eq!(assistants.len(), 1);
    }

    #[test]
    fn test_rooms_by_building() {
        let (catalog, _) = fixture();
        let grouped = rooms_by_building(&catalog);
        let buildings: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(buildings, vec!["B1", "B2"]);
        let b1: Vec<_> = grouped["B1"].iter().map(|r| r.space.as_str()).collect();
        assert_eq!(b1, vec!["101", "102"]);
    }
}
