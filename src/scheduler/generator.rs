//! Timetable generation.
//!
//! # Algorithm
//!
//! 1. Abort if there are no sections or no instructors.
//! 2. For each section, for each course in its list, for each session type
//!    the course needs (Lecture, Tutorial, Lab by default):
//!    a. resolve eligible instructors, covering gaps with a placeholder;
//!    b. run slot search against the ledger.
//! 3. Collect committed assignments, staffing gaps and dropped sessions.
//!
//! Processing is strictly sequential. Each commit narrows the options of
//! every later session, so results depend on section order, course order
//! and session order.
//!
//! # Reference
//! Burke & Petrovic (2002), "Recent research directions in automated
//! timetabling", Sec. 3 (sequential heuristics)

use tracing::{info, info_span, warn};

use crate::config::GeneratorConfig;
use crate::eligibility::{Eligibility, EligibilityResolver, StaffingPolicy};
use crate::error::{GenerateError, RequiredCatalog, Result};
use crate::fallback::FallbackRegistry;
use crate::ledger::Ledger;
use crate::models::{Catalog, Timetable, UnplacedReason, UnplacedSession};
use crate::search::{CandidateStrategy, SearchOutcome, ShuffledFirstFit, SlotSearch};
use crate::suitability::RoomFilter;

/// Drives a full generation pass over a catalog.
///
/// # Example
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use u_timetable::config::GeneratorConfig;
/// use u_timetable::models::{Catalog, Course, Instructor, Room, Section, TimeSlot};
/// use u_timetable::scheduler::TimetableGenerator;
///
/// let catalog = Catalog::new()
///     .with_room(Room::lecture("Hall", "Blue", 150))
///     .with_course(Course::new("CSC111").with_lecture())
///     .with_instructor(Instructor::professor("P1").qualified_for("CSC111"))
///     .with_section(Section::new("S1_L1", 40).with_course("CSC111"))
///     .with_slot(TimeSlot::new(
///         "T1",
///         Weekday::Sun,
///         NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
///     ));
///
/// let mut generator = TimetableGenerator::new(GeneratorConfig::new().with_seed(42));
/// let timetable = generator.generate(&catalog).unwrap();
/// assert_eq!(timetable.assignment_count(), 1);
/// assert!(timetable.is_complete());
/// ```
#[derive(Debug)]
pub struct TimetableGenerator {
    config: GeneratorConfig,
    strategy: Option<Box<dyn CandidateStrategy>>,
}

impl TimetableGenerator {
    /// Creates a generator using [`ShuffledFirstFit`] seeded from the config.
    ///
    /// With a fixed seed every pass produces the same timetable for the
    /// same catalog.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            strategy: None,
        }
    }

    /// Replaces the candidate ordering. The strategy's state carries over
    /// between passes.
    pub fn with_strategy<S: CandidateStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs one generation pass from an empty ledger.
    ///
    /// Fails only when sections or instructors are missing entirely (or the
    /// configuration is invalid). Every other shortfall is reported on the
    /// returned timetable.
    pub fn generate(&mut self, catalog: &Catalog) -> Result<Timetable> {
        self.config.validate()?;
        if catalog.sections().is_empty() {
            return Err(GenerateError::DataMissing {
                catalog: RequiredCatalog::Sections,
            });
        }
        if catalog.instructors().is_empty() {
            return Err(GenerateError::DataMissing {
                catalog: RequiredCatalog::Instructors,
            });
        }

        let mut seeded;
        let strategy: &mut dyn CandidateStrategy = match self.strategy.as_deref_mut() {
            Some(custom) => custom,
            None => {
                seeded = match self.config.seed {
                    Some(seed) => ShuffledFirstFit::seeded(seed),
                    None => ShuffledFirstFit::from_entropy(),
                };
                &mut seeded
            }
        };

        let _span = info_span!("generate", strategy = strategy.name()).entered();
        info!(
            rooms = catalog.rooms().len(),
            courses = catalog.courses().len(),
            instructors = catalog.instructors().len(),
            sections = catalog.sections().len(),
            slots = catalog.slots().len(),
            "generating timetable"
        );

        let policy = StaffingPolicy::from_config(&self.config);
        let resolver = EligibilityResolver::new(catalog.instructors(), &policy);
        let mut registry = FallbackRegistry::reserving(catalog.instructors());
        let mut ledger = Ledger::new();
        let mut unplaced = Vec::new();
        let mut search = SlotSearch::new(RoomFilter::from_config(&self.config), strategy);

        for section in catalog.sections() {
            for course_id in &section.courses {
                let Some(course) = catalog.course(course_id) else {
                    warn!(section = %section.id, course = %course_id, "unknown course; skipped");
                    unplaced.push(UnplacedSession {
                        section_id: section.id.clone(),
                        course_id: course_id.clone(),
                        session_type: None,
                        reason: UnplacedReason::UnknownCourse,
                    });
                    continue;
                };

                for session_type in course.sessions_in(&self.config.session_order) {
                    let instructors = match resolver.resolve(course_id, session_type) {
                        Eligibility::Staffed(eligible) => eligible,
                        Eligibility::Unstaffed { required_role } => {
                            vec![registry.cover(course_id, session_type, required_role)]
                        }
                    };

                    let outcome = search.place(
                        &mut ledger,
                        section,
                        course_id,
                        session_type,
                        instructors,
                        catalog.rooms(),
                        catalog.slots(),
                    );

                    let reason = match outcome {
                        SearchOutcome::Placed(_) => continue,
                        SearchOutcome::NoSuitableRoom => UnplacedReason::NoSuitableRoom,
                        SearchOutcome::NoTimeSlots => UnplacedReason::NoTimeSlots,
                        SearchOutcome::Exhausted { .. } => UnplacedReason::AllCandidatesConflict,
                    };
                    warn!(
                        section = %section.id,
                        course = %course_id,
                        session = %session_type,
                        ?reason,
                        "session dropped"
                    );
                    unplaced.push(UnplacedSession {
                        section_id: section.id.clone(),
                        course_id: course_id.clone(),
                        session_type: Some(session_type),
                        reason,
                    });
                }
            }
        }

        let (staffing_gaps, fallback_instructors) = registry.into_parts();
        info!(
            placed = ledger.len(),
            unplaced = unplaced.len(),
            staffing_gaps = staffing_gaps.len(),
            "timetable generated"
        );

        Ok(Timetable {
            assignments: ledger.into_assignments(),
            staffing_gaps,
            unplaced,
            fallback_instructors,
        })
    }
}

/// Generates a timetable with the default strategy.
pub fn generate_timetable(catalog: &Catalog, config: GeneratorConfig) -> Result<Timetable> {
    TimetableGenerator::new(config).generate(catalog)
}
