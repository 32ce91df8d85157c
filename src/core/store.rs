//! TOML-backed in-memory data store
//!
//! Stands in for the platform's catalog, progress and streak services. The file
//! layout is:
//!
//! ```toml
//! [[courses]]
//! id = "rust-101"
//! title = "Rust Basics"
//! category = ["programming"]
//! difficulty = "beginner"
//! duration_hours = 2.0
//!
//! [[lessons]]
//! id = "rust-101-l1"
//! course_id = "rust-101"
//! order = 1
//!
//! [[paths]]
//! id = "systems"
//! difficulty = "intermediate"
//! courses = ["rust-101", "rust-201"]
//!
//! [[learners]]
//! id = "ada"
//! streak_days = 3
//! enrolled = ["rust-101"]
//!
//! [[learners.progress]]
//! course_id = "rust-101"
//! progress_percentage = 40.0
//! ```

use crate::core::error::EngineError;
use crate::core::models::{Course, CourseProgress, LearnerStreak, LearningPathCandidate, Lesson};
use crate::core::source::LearningDataSource;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One learner's stored state
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LearnerRecord {
    /// Learner id
    pub id: String,
    /// Current activity streak in days
    #[serde(default)]
    pub streak_days: u32,
    /// Enrolled course ids, in enrollment order
    #[serde(default)]
    pub enrolled: Vec<String>,
    /// Progress records for enrolled courses
    #[serde(default)]
    pub progress: Vec<CourseProgress>,
}

impl LearnerRecord {
    /// Create a learner with no enrollments
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self {
            id,
            streak_days: 0,
            enrolled: Vec::new(),
            progress: Vec::new(),
        }
    }
}

/// Catalog and learner data held in memory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InMemoryStore {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    lessons: Vec<Lesson>,
    #[serde(default)]
    paths: Vec<LearningPathCandidate>,
    #[serde(default)]
    learners: Vec<LearnerRecord>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store from a TOML document
    ///
    /// # Errors
    /// Returns [`EngineError::Parse`] if the document does not match the layout,
    /// or [`EngineError::DataUnavailable`] for duplicate course or learner ids.
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        let store: Self = toml::from_str(toml_str)?;
        store.check_unique_ids()?;
        Ok(store)
    }

    /// Load a store from a TOML file
    ///
    /// # Errors
    /// Returns [`EngineError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml`](Self::from_toml).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path.as_ref())?;
        let store = Self::from_toml(&content)?;
        crate::info!(
            "Loaded data store {} ({} courses, {} learners)",
            path.as_ref().display(),
            store.courses.len(),
            store.learners.len()
        );
        Ok(store)
    }

    fn check_unique_ids(&self) -> Result<(), EngineError> {
        for (idx, course) in self.courses.iter().enumerate() {
            if self.courses[..idx].iter().any(|c| c.id == course.id) {
                return Err(EngineError::unavailable(format!(
                    "duplicate course id '{}'",
                    course.id
                )));
            }
        }
        for (idx, learner) in self.learners.iter().enumerate() {
            if self.learners[..idx].iter().any(|l| l.id == learner.id) {
                return Err(EngineError::unavailable(format!(
                    "duplicate learner id '{}'",
                    learner.id
                )));
            }
        }
        Ok(())
    }

    /// Add or replace a catalog course
    pub fn add_course(&mut self, course: Course) {
        if let Some(existing) = self.courses.iter_mut().find(|c| c.id == course.id) {
            *existing = course;
        } else {
            self.courses.push(course);
        }
    }

    /// Add a lesson
    pub fn add_lesson(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
    }

    /// Add a learning path
    pub fn add_path(&mut self, path: LearningPathCandidate) {
        self.paths.push(path);
    }

    /// Add or replace a learner record
    pub fn add_learner(&mut self, learner: LearnerRecord) {
        if let Some(existing) = self.learners.iter_mut().find(|l| l.id == learner.id) {
            *existing = learner;
        } else {
            self.learners.push(learner);
        }
    }

    /// Look up a catalog course
    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Look up a learner record
    #[must_use]
    pub fn learner(&self, learner_id: &str) -> Option<&LearnerRecord> {
        self.learners.iter().find(|l| l.id == learner_id)
    }

    /// Ids of all stored learners
    #[must_use]
    pub fn learner_ids(&self) -> Vec<&str> {
        self.learners.iter().map(|l| l.id.as_str()).collect()
    }

    fn require_learner(&self, learner_id: &str) -> Result<&LearnerRecord, EngineError> {
        self.learner(learner_id)
            .ok_or_else(|| EngineError::unavailable(format!("unknown learner '{learner_id}'")))
    }
}

impl LearningDataSource for InMemoryStore {
    fn all_courses(&self) -> Result<Vec<Course>, EngineError> {
        Ok(self.courses.clone())
    }

    fn enrolled_courses(&self, learner_id: &str) -> Result<Vec<Course>, EngineError> {
        let learner = self.require_learner(learner_id)?;
        let mut enrolled = Vec::with_capacity(learner.enrolled.len());
        for course_id in &learner.enrolled {
            match self.course(course_id) {
                Some(course) if !enrolled.iter().any(|c: &Course| c.id == course.id) => {
                    enrolled.push(course.clone());
                }
                Some(_) => {}
                None => crate::warn!(
                    "Learner '{learner_id}' is enrolled in unknown course '{course_id}', skipping"
                ),
            }
        }
        Ok(enrolled)
    }

    fn course_progress(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> Result<Option<CourseProgress>, EngineError> {
        let learner = self.require_learner(learner_id)?;
        Ok(learner
            .progress
            .iter()
            .find(|p| p.course_id == course_id)
            .cloned())
    }

    fn lessons_for_course(&self, course_id: &str) -> Result<Vec<Lesson>, EngineError> {
        Ok(self
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect())
    }

    fn learning_paths(&self) -> Result<Vec<LearningPathCandidate>, EngineError> {
        Ok(self.paths.clone())
    }

    fn learner_streak(&self, learner_id: &str) -> Result<LearnerStreak, EngineError> {
        let learner = self.require_learner(learner_id)?;
        Ok(LearnerStreak {
            current_streak_days: learner.streak_days,
        })
    }
}
