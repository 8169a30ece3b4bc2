//! Section (student cohort) model.
//!
//! A section is a fixed group of students sharing a course load. Its
//! academic level and specialization are structured fields supplied by the
//! loader. [`SectionProfile::infer`] is available for data sets that still
//! encode them in the section id (`S3_L3_AID_...`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic year of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    L1,
    L2,
    L3,
    L4,
    Unknown,
}

/// Program track of a section.
///
/// Levels 1 and 2 are `Common`; levels 3 and 4 carry a track or fall back
/// to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Specialization {
    Common,
    /// Artificial Intelligence & Data science.
    Aid,
    /// Cybersecurity.
    Cnc,
    /// Computer Science.
    Csc,
    /// Bioinformatics.
    Bif,
    General,
    Unknown,
}

impl Level {
    /// Presentation rank (L1 first, Unknown last).
    pub fn rank(&self) -> u8 {
        match self {
            Level::L1 => 1,
            Level::L2 => 2,
            Level::L3 => 3,
            Level::L4 => 4,
            Level::Unknown => 99,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::L3 => "L3",
            Level::L4 => "L4",
            Level::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

impl Specialization {
    /// Presentation rank (Common first, Unknown last).
    pub fn rank(&self) -> u8 {
        match self {
            Specialization::Common => 0,
            Specialization::Aid => 1,
            Specialization::Cnc => 2,
            Specialization::Csc => 3,
            Specialization::Bif => 4,
            Specialization::General => 5,
            Specialization::Unknown => 99,
        }
    }

    /// Full program name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Specialization::Common => "Common",
            Specialization::Aid => "Artificial Intelligence & Data Science",
            Specialization::Cnc => "Cybersecurity",
            Specialization::Csc => "Computer Science",
            Specialization::Bif => "Bioinformatics",
            Specialization::General => "General",
            Specialization::Unknown => "Unknown",
        }
    }
}

/// Level and specialization of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProfile {
    pub level: Level,
    pub specialization: Specialization,
}

impl SectionProfile {
    /// Profile used when the loader supplies nothing.
    pub const UNKNOWN: SectionProfile = SectionProfile {
        level: Level::Unknown,
        specialization: Specialization::Unknown,
    };

    /// Infers a profile from id markers: `_L1`..`_L4` for the level and
    /// `_AID_`, `_CNC_`, `_CSC_`, `_BIF_` for the track.
    pub fn infer(section_id: &str) -> Self {
        let level = [
            ("_L1", Level::L1),
            ("_L2", Level::L2),
            ("_L3", Level::L3),
            ("_L4", Level::L4),
        ]
        .into_iter()
        .find(|(marker, _)| section_id.contains(marker))
        .map(|(_, level)| level)
        .unwrap_or(Level::Unknown);

        let specialization = match level {
            Level::L1 | Level::L2 => Specialization::Common,
            Level::L3 | Level::L4 => [
                ("_AID_", Specialization::Aid),
                ("_CNC_", Specialization::Cnc),
                ("_CSC_", Specialization::Csc),
                ("_BIF_", Specialization::Bif),
            ]
            .into_iter()
            .find(|(marker, _)| section_id.contains(marker))
            .map(|(_, spec)| spec)
            .unwrap_or(Specialization::General),
            Level::Unknown => Specialization::Unknown,
        };

        Self {
            level,
            specialization,
        }
    }
}

/// A student cohort with a fixed course list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Number of enrolled students.
    pub student_count: u32,
    /// Course ids in processing order.
    pub courses: Vec<String>,
    /// Academic level.
    pub level: Level,
    /// Program track.
    pub specialization: Specialization,
}

impl Section {
    /// Creates a section with an unknown profile and no courses.
    pub fn new(id: impl Into<String>, student_count: u32) -> Self {
        Self {
            id: id.into(),
            student_count,
            courses: Vec::new(),
            level: SectionProfile::UNKNOWN.level,
            specialization: SectionProfile::UNKNOWN.specialization,
        }
    }

    /// Adds a course to the section's load.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.courses.push(course_id.into());
        self
    }

    /// Adds several courses in order.
    pub fn with_courses<I, S>(mut self, course_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses.extend(course_ids.into_iter().map(Into::into));
        self
    }

    /// Sets level and specialization explicitly.
    pub fn with_profile(mut self, profile: SectionProfile) -> Self {
        self.level = profile.level;
        self.specialization = profile.specialization;
        self
    }

    /// Sets the profile from the id naming convention.
    pub fn with_inferred_profile(self) -> Self {
        let profile = SectionProfile::infer(&self.id);
        self.with_profile(profile)
    }

    /// Current profile.
    pub fn profile(&self) -> SectionProfile {
        SectionProfile {
            level: self.level,
            specialization: self.specialization,
        }
    }

    /// Section number: the digits after the first character of the first
    /// `_`-separated token (`"S12_L2"` → 12). Zero if absent.
    pub fn number(&self) -> u32 {
        self.id
            .split('_')
            .next()
            .and_then(|head| head.get(1..))
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0)
    }

    /// Sort key for presentation: level, then track, then section number.
    pub fn display_key(&self) -> (u8, u8, u32) {
        (self.level.rank(), self.specialization.rank(), self.number())
    }
}
