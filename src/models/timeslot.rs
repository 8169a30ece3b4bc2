//! Time slot model.
//!
//! A slot is a fixed teaching period (day, start, end) shared by the whole
//! schedule. Slot ids are the unit of conflict detection: two sessions
//! collide only if they use the same slot id.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A teaching period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Day of the week.
    pub day: Weekday,
    /// Start time.
    pub start: NaiveTime,
    /// End time.
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot from typed values.
    pub fn new(id: impl Into<String>, day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id: id.into(),
            day,
            start,
            end,
        }
    }

    /// Parses a slot from text fields as they appear in timetable sheets.
    ///
    /// Times accept `"9:00 AM"` and `"09:00"`; days accept full or short
    /// English names.
    pub fn parse(id: &str, day: &str, start: &str, end: &str) -> Result<Self, CatalogError> {
        let day_value = day.trim();
        let day = day_value
            .parse::<Weekday>()
            .map_err(|_| CatalogError::InvalidDay {
                slot_id: id.to_string(),
                value: day_value.to_string(),
            })?;
        let start = parse_clock(id, start)?;
        let end = parse_clock(id, end)?;
        if end <= start {
            return Err(CatalogError::InvertedSlot {
                slot_id: id.to_string(),
            });
        }
        Ok(Self::new(id.trim(), day, start, end))
    }

    /// Length of the slot in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Chronological key: week starting Sunday, then start time.
    pub fn sort_key(&self) -> (u32, NaiveTime) {
        (self.day.num_days_from_sunday(), self.start)
    }
}

fn parse_clock(slot_id: &str, value: &str) -> Result<NaiveTime, CatalogError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| CatalogError::InvalidTime {
            slot_id: slot_id.to_string(),
            value: value.to_string(),
        })
}
