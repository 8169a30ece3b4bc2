//! Course timetable generation for the U-Engine ecosystem.
//!
//! Assigns course sessions (lecture, tutorial, lab) to student sections,
//! qualified instructors, suitable rooms, and time slots, without
//! double-booking any instructor, room, or section within a slot.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Room`, `Course`, `Instructor`, `Section`,
//!   `TimeSlot`, `Assignment`, `Catalog`, `Timetable`
//! - **`eligibility`**: Role policy and qualified-instructor lookup
//! - **`fallback`**: Placeholder instructors and staffing-gap diagnostics
//! - **`suitability`**: Room capacity/type filter per session type
//! - **`ledger`**: Append-only assignment ledger with O(1) conflict checks
//! - **`search`**: Pluggable candidate ordering and per-session slot search
//! - **`scheduler`**: Generation orchestrator and KPIs
//! - **`views`**: Day-grouped agendas for presentation layers
//! - **`validation`**: Catalog integrity checks
//! - **`config`**: Generator policy (seed, tutorial limit, override courses)
//!
//! # Architecture
//!
//! Data loading and rendering live outside this crate. Loaders hand over a
//! validated [`models::Catalog`]; renderers read the produced
//! [`models::Timetable`] and the [`views`] built on it.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod config;
pub mod eligibility;
pub mod error;
pub mod fallback;
pub mod ledger;
pub mod models;
pub mod scheduler;
pub mod search;
pub mod suitability;
pub mod validation;
pub mod views;

pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use scheduler::{generate_timetable, TimetableGenerator};
