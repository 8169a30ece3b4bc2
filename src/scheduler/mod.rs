//! Timetable generation and KPI evaluation.
//!
//! # Algorithm
//!
//! `TimetableGenerator` is a sequential, greedy, first-fit placer. It never
//! backtracks over committed sessions and gives no optimality guarantee;
//! candidate ordering is delegated to a [`CandidateStrategy`].
//!
//! # KPI
//!
//! `TimetableKpi` computes placement rate, per-type counts, room
//! utilization, instructor load, and staffing-gap figures.
//!
//! [`CandidateStrategy`]: crate::search::CandidateStrategy

mod generator;
mod kpi;

pub use generator::{generate_timetable, TimetableGenerator};
pub use kpi::TimetableKpi;
