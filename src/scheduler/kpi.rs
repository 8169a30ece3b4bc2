//! Timetable quality metrics (KPIs).
//!
//! Summarizes a generated timetable against its catalog.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | placed / (placed + dropped sessions) |
//! | Placed by Type | committed sessions per session type |
//! | Room Utilization | occupied slots / total slots, per room |
//! | Instructor Load | sessions per instructor |
//! | Placeholder Sessions | sessions taught by synthesized instructors |

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{Catalog, SessionType, Timetable};

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Committed sessions.
    pub placed_sessions: usize,
    /// Sessions of known courses that were dropped.
    pub dropped_sessions: usize,
    /// Section course references that did not resolve to a course.
    pub unknown_course_refs: usize,
    /// placed / (placed + dropped), 1.0 when nothing was requested.
    pub placement_rate: f64,
    /// Committed sessions per type.
    pub placed_by_type: BTreeMap<SessionType, usize>,
    /// Per-room utilization (0.0..1.0) for every catalog room.
    pub utilization_by_room: HashMap<String, f64>,
    /// Mean of `utilization_by_room`.
    pub avg_room_utilization: f64,
    /// Sessions per instructor (only instructors with at least one).
    pub load_by_instructor: HashMap<String, usize>,
    /// Distinct staffing gaps.
    pub staffing_gaps: usize,
    /// Sessions taught by synthesized placeholders.
    pub placeholder_sessions: usize,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and the catalog it was built from.
    pub fn calculate(timetable: &Timetable, catalog: &Catalog) -> Self {
        let placed_sessions = timetable.assignments.len();
        let unknown_course_refs = timetable
            .unplaced
            .iter()
            .filter(|u| u.session_type.is_none())
            .count();
        let dropped_sessions = timetable.unplaced.len() - unknown_course_refs;

        let requested = placed_sessions + dropped_sessions;
        let placement_rate = if requested == 0 {
            1.0
        } else {
            placed_sessions as f64 / requested as f64
        };

        let mut placed_by_type = BTreeMap::new();
        let mut load_by_instructor: HashMap<String, usize> = HashMap::new();
        let mut room_slots: HashMap<&str, HashSet<&str>> = HashMap::new();
        for a in &timetable.assignments {
            *placed_by_type.entry(a.session_type).or_insert(0) += 1;
            *load_by_instructor.entry(a.instructor_id.clone()).or_insert(0) += 1;
            room_slots
                .entry(a.room_id.as_str())
                .or_default()
                .insert(a.slot_id.as_str());
        }

        let total_slots = catalog.slots().len();
        let utilization_by_room: HashMap<String, f64> = catalog
            .rooms()
            .iter()
            .map(|room| {
                let id = room.id();
                let used = room_slots.get(id.as_str()).map_or(0, HashSet::len);
                let util = if total_slots == 0 {
                    0.0
                } else {
                    used as f64 / total_slots as f64
                };
                (id, util)
            })
            .collect();
        let avg_room_utilization = if utilization_by_room.is_empty() {
            0.0
        } else {
            utilization_by_room.values().sum::<f64>() / utilization_by_room.len() as f64
        };

        let placeholder_ids: HashSet<&str> = timetable
            .fallback_instructors
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        let placeholder_sessions = timetable
            .assignments
            .iter()
            .filter(|a| placeholder_ids.contains(a.instructor_id.as_str()))
            .count();

        Self {
            placed_sessions,
            dropped_sessions,
            unknown_course_refs,
            placement_rate,
            placed_by_type,
            utilization_by_room,
            avg_room_utilization,
            load_by_instructor,
            staffing_gaps: timetable.staffing_gaps.len(),
            placeholder_sessions,
        }
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_placement_rate: f64, max_staffing_gaps: usize) -> bool {
        self.placement_rate >= min_placement_rate && self.staffing_gaps <= max_staffing_gaps
    }
}
