//! Fallback staffing.
//!
//! Covers staffing gaps with synthesized placeholder instructors so that a
//! missing qualification never aborts generation. The placeholder is a real
//! schedulable instructor (it occupies slots like anyone else); the gap
//! itself is recorded separately as a [`StaffingGap`], which is the list a
//! report should treat as staffing errors.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::warn;

use crate::models::{Instructor, InstructorRole, SessionType, StaffingGap};

/// Synthesized instructors and the gaps that required them.
#[derive(Debug, Clone, Default)]
pub struct FallbackRegistry {
    instructors: BTreeMap<(InstructorRole, String), Instructor>,
    order: Vec<(InstructorRole, String)>,
    gaps: BTreeSet<StaffingGap>,
    /// Ids placeholders must not take: catalog instructors and earlier placeholders.
    taken: HashSet<String>,
}

impl FallbackRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry whose placeholders avoid the given instructors' ids.
    pub fn reserving<'a>(instructors: impl IntoIterator<Item = &'a Instructor>) -> Self {
        Self {
            taken: instructors.into_iter().map(|i| i.id.clone()).collect(),
            ..Self::default()
        }
    }

    /// Deterministic placeholder id: `UNKNOWN_<ROLE>_<course>`.
    pub fn placeholder_id(role: InstructorRole, course_id: &str) -> String {
        format!("UNKNOWN_{}_{}", role.code(), course_id)
    }

    /// Returns the placeholder for (role, course), creating it on first use,
    /// and records the gap for (course, session type, role).
    pub fn cover(
        &mut self,
        course_id: &str,
        session_type: SessionType,
        required_role: InstructorRole,
    ) -> &Instructor {
        let gap = StaffingGap {
            course_id: course_id.to_string(),
            session_type,
            required_role,
        };
        if !self.gaps.contains(&gap) {
            warn!(gap = %gap.describe(), "no qualified instructor; using placeholder");
            self.gaps.insert(gap);
        }

        let key = (required_role, course_id.to_string());
        if !self.instructors.contains_key(&key) {
            let id = self.free_id(Self::placeholder_id(required_role, course_id));
            self.taken.insert(id.clone());
            self.order.push(key.clone());
            self.instructors.insert(
                key.clone(),
                Instructor::new(id, required_role)
                    .with_name("Unknown Instructor")
                    .qualified_for(course_id),
            );
        }
        &self.instructors[&key]
    }

    /// `base`, or `base_2`, `base_3`, ... if already taken.
    fn free_id(&self, base: String) -> String {
        if !self.taken.contains(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}_{n}");
            if !self.taken.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Distinct staffing gaps, sorted.
    pub fn gaps(&self) -> impl Iterator<Item = &StaffingGap> {
        self.gaps.iter()
    }

    /// Number of distinct gaps.
    pub fn gap_count(&self) -> usize {
        self.gaps.len()
    }

    /// Synthesized instructors in creation order.
    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.order.iter().filter_map(|key| self.instructors.get(key))
    }

    /// Consumes the registry into (gaps, instructors).
    pub fn into_parts(self) -> (Vec<StaffingGap>, Vec<Instructor>) {
        let Self {
            mut instructors,
            order,
            gaps,
            ..
        } = self;
        let synthesized = order
            .into_iter()
            .filter_map(|key| instructors.remove(&key))
            .collect();
        (gaps.into_iter().collect(), synthesized)
    }
}
