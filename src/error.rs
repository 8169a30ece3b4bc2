//! Error types for timetable generation.
//!
//! Only missing prerequisite catalogs abort a generation pass. Staffing gaps
//! and unplaceable sessions are recovered locally and reported on the
//! [`Timetable`](crate::models::Timetable) instead.

use std::fmt;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Prerequisite catalog that must be non-empty before generation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredCatalog {
    Sections,
    Instructors,
}

impl fmt::Display for RequiredCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredCatalog::Sections => f.write_str("sections"),
            RequiredCatalog::Instructors => f.write_str("instructors"),
        }
    }
}

/// Errors that abort a generation pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A prerequisite catalog is empty; nothing was attempted.
    #[error("no {catalog} available; generation not attempted")]
    DataMissing { catalog: RequiredCatalog },

    /// Generator configuration is unusable.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while building catalog records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A clock time could not be parsed.
    #[error("invalid time '{value}' for slot '{slot_id}'")]
    InvalidTime { slot_id: String, value: String },

    /// A weekday name could not be parsed.
    #[error("invalid day '{value}' for slot '{slot_id}'")]
    InvalidDay { slot_id: String, value: String },

    /// A slot ends at or before it starts.
    #[error("slot '{slot_id}' ends before it starts")]
    InvertedSlot { slot_id: String },
}
