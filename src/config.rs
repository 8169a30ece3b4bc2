//! Generator configuration.
//!
//! Policy values that are data rather than logic: the RNG seed, the
//! tutorial room size limit, the course ids that always need an assistant
//! professor, and the session-type processing order. Loadable from TOML:
//!
//! ```toml
//! seed = 42
//! tutorial_room_capacity_limit = 25
//! assistant_only_courses = ["AID414", "BIF410", "CNC414", "CSC413"]
//! session_order = ["Lecture", "Tutorial", "Lab"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{GenerateError, Result};
use crate::models::SessionType;

/// Default seat limit for tutorial rooms.
pub const DEFAULT_TUTORIAL_ROOM_CAPACITY_LIMIT: u32 = 25;

/// Courses staffed by assistant professors for every session type.
pub const DEFAULT_ASSISTANT_ONLY_COURSES: [&str; 4] = ["AID414", "BIF410", "CNC414", "CSC413"];

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// RNG seed for candidate shuffling. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Tutorials only use rooms with at most this many seats.
    ///
    /// The timetable rules fix this at 25 ([`DEFAULT_TUTORIAL_ROOM_CAPACITY_LIMIT`]).
    /// Any other value is a local policy extension: it changes which rooms
    /// count as tutorial rooms for the whole pass.
    pub tutorial_room_capacity_limit: u32,
    /// Course ids whose sessions all require an assistant professor.
    pub assistant_only_courses: BTreeSet<String>,
    /// Order in which a course's session types are attempted. Must list
    /// every session type exactly once.
    pub session_order: Vec<SessionType>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tutorial_room_capacity_limit: DEFAULT_TUTORIAL_ROOM_CAPACITY_LIMIT,
            assistant_only_courses: DEFAULT_ASSISTANT_ONLY_COURSES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            session_order: SessionType::ALL.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the tutorial room capacity limit.
    pub fn with_tutorial_room_capacity_limit(mut self, limit: u32) -> Self {
        self.tutorial_room_capacity_limit = limit;
        self
    }

    /// Replaces the assistant-only course set.
    pub fn with_assistant_only_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assistant_only_courses = courses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the session-type order.
    pub fn with_session_order(mut self, order: Vec<SessionType>) -> Self {
        self.session_order = order;
        self
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GenerateError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GenerateError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Rejects a session order that is not a permutation of every session
    /// type. An omitted type would never be attempted nor reported.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for session_type in &self.session_order {
            if !seen.insert(*session_type) {
                return Err(GenerateError::InvalidConfig(format!(
                    "session type {session_type} listed twice in session_order"
                )));
            }
        }
        if let Some(missing) = SessionType::ALL.iter().find(|s| !seen.contains(*s)) {
            return Err(GenerateError::InvalidConfig(format!(
                "session type {missing} missing from session_order"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GeneratorConfig::default();
        assert_eq!(c.seed, None);
        assert_eq!(c.tutorial_room_capacity_limit, 25);
        assert!(c.assistant_only_courses.contains("CSC413"));
        assert_eq!(c.assistant_only_courses.len(), 4);
        assert_eq!(c.session_order, SessionType::ALL.to_vec());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let c = GeneratorConfig::from_toml_str("seed = 7\nassistant_only_courses = []\n").unwrap();
        assert_eq!(c.seed, Some(7));
        assert!(c.assistant_only_courses.is_empty());
        assert_eq!(c.tutorial_room_capacity_limit, 25);
    }

    #[test]
    fn test_from_toml_full() {
        let c = GeneratorConfig::from_toml_str(
            r#"
            seed = 1
            tutorial_room_capacity_limit = 30
            assistant_only_courses = ["X1"]
            session_order = ["Lab", "Lecture", "Tutorial"]
            "#,
        )
        .unwrap();
        assert_eq!(c.tutorial_room_capacity_limit, 30);
        assert_eq!(
            c.session_order,
            vec![SessionType::Lab, SessionType::Lecture, SessionType::Tutorial]
        );
    }

    #[test]
    fn test_rejects_duplicate_session_type() {
        let err = GeneratorConfig::from_toml_str(r#"session_order = ["Lab", "Lab"]"#).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_omitted_session_type() {
        let err = GeneratorConfig::from_toml_str(r#"session_order = ["Lab"]"#).unwrap_err();
        assert_eq!(
            err,
            GenerateError::InvalidConfig(
                "session type Lecture missing from session_order".to_string()
            )
        );
        let partial = GeneratorConfig::new()
            .with_session_order(vec![SessionType::Tutorial, SessionType::Lecture]);
        assert!(partial.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(GeneratorConfig::from_toml_str("seed = \"abc\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = GeneratorConfig::from_toml_file("/nonexistent/timetable.toml").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
