//! Instructor eligibility.
//!
//! Decides which role a session needs and which catalog instructors can
//! teach it. An empty result is reported as [`Eligibility::Unstaffed`]
//! rather than an error; the generator decides how to cover the gap.
//!
//! # Role Policy
//!
//! | Session | Required role |
//! |---------|---------------|
//! | Lecture | Professor |
//! | Tutorial, Lab | Assistant Professor |
//! | any session of an assistant-only course | Assistant Professor |

use std::collections::BTreeSet;

use crate::config::GeneratorConfig;
use crate::models::{Instructor, InstructorRole, SessionType};

/// Maps a (course, session type) pair to the role that must teach it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffingPolicy {
    assistant_only_courses: BTreeSet<String>,
}

impl StaffingPolicy {
    /// Creates a policy with the given assistant-only override set.
    pub fn new(assistant_only_courses: BTreeSet<String>) -> Self {
        Self {
            assistant_only_courses,
        }
    }

    /// Builds the policy from generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.assistant_only_courses.clone())
    }

    /// Role required to teach a session.
    pub fn required_role(&self, course_id: &str, session_type: SessionType) -> InstructorRole {
        if self.assistant_only_courses.contains(course_id) {
            return InstructorRole::AssistantProfessor;
        }
        match session_type {
            SessionType::Lecture => InstructorRole::Professor,
            SessionType::Tutorial | SessionType::Lab => InstructorRole::AssistantProfessor,
        }
    }
}

/// Outcome of eligibility resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility<'a> {
    /// Qualified instructors in catalog order. Never empty.
    Staffed(Vec<&'a Instructor>),
    /// Nobody of the required role is qualified for the course.
    Unstaffed { required_role: InstructorRole },
}

/// Finds qualified instructors for sessions.
#[derive(Debug, Clone)]
pub struct EligibilityResolver<'a> {
    instructors: &'a [Instructor],
    policy: &'a StaffingPolicy,
}

impl<'a> EligibilityResolver<'a> {
    /// Creates a resolver over a catalog's instructors.
    pub fn new(instructors: &'a [Instructor], policy: &'a StaffingPolicy) -> Self {
        Self {
            instructors,
            policy,
        }
    }

    /// Instructors who hold the required role and list the course.
    pub fn resolve(&self, course_id: &str, session_type: SessionType) -> Eligibility<'a> {
        let required_role = self.policy.required_role(course_id, session_type);
        let eligible: Vec<&'a Instructor> = self
            .instructors
            .iter()
            .filter(|i| i.role == required_role && i.can_teach(course_id))
            .collect();

        if eligible.is_empty() {
            Eligibility::Unstaffed { required_role }
        } else {
            Eligibility::Staffed(eligible)
        }
    }
}
