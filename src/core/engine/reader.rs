//! Learner state reader
//!
//! Performs every read a scoring pass needs up front. Any failed read is
//! returned to the caller so a partial snapshot is never scored.

use crate::core::error::EngineError;
use crate::core::models::{Course, CourseProgress, LearnerSnapshot};
use crate::core::source::LearningDataSource;
use std::collections::HashMap;

/// A learner's snapshot together with the catalog it is scored against
#[derive(Debug, Clone, Default)]
pub struct LearnerState {
    /// Full catalog, in catalog order
    pub catalog: Vec<Course>,
    /// Enrollment, completion and time facts
    pub snapshot: LearnerSnapshot,
    /// Progress records keyed by course id (absent = never opened)
    pub progress: HashMap<String, CourseProgress>,
}

impl LearnerState {
    /// Read catalog, enrollments and per-course progress for a learner
    ///
    /// # Errors
    /// Propagates the first failing collaborator read.
    pub fn read<S: LearningDataSource + ?Sized>(
        source: &S,
        learner_id: &str,
    ) -> Result<Self, EngineError> {
        let catalog = source.all_courses()?;
        let enrolled_courses = source.enrolled_courses(learner_id)?;

        let mut state = Self::default();
        for course in &enrolled_courses {
            if let Some(progress) = source.course_progress(learner_id, &course.id)? {
                state.snapshot.total_time_spent_minutes = state
                    .snapshot
                    .total_time_spent_minutes
                    .saturating_add(progress.time_spent_minutes);
                if progress.is_finished() {
                    state.snapshot.completed_course_ids.insert(course.id.clone());
                }
                state.progress.insert(course.id.clone(), progress);
            }
        }

        crate::debug!(
            "Read learner '{learner_id}': {} enrolled, {} completed, {} min",
            enrolled_courses.len(),
            state.snapshot.completed_course_ids.len(),
            state.snapshot.total_time_spent_minutes
        );

        state.catalog = catalog;
        state.snapshot.enrolled_courses = enrolled_courses;
        Ok(state)
    }

    /// Progress record for a course, if any
    #[must_use]
    pub fn progress_for(&self, course_id: &str) -> Option<&CourseProgress> {
        self.progress.get(course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Difficulty;
    use crate::core::store::{InMemoryStore, LearnerRecord};

    fn store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for id in ["a", "b", "c"] {
            store.add_course(Course::new(
                id.to_string(),
                id.to_uppercase(),
                Difficulty::Beginner,
                1.0,
            ));
        }
        let mut learner = LearnerRecord::new("ada".to_string());
        learner.enrolled = vec!["a".to_string(), "b".to_string()];
        learner.progress = vec![
            CourseProgress {
                course_id: "a".to_string(),
                completed: true,
                progress_percentage: 100.0,
                time_spent_minutes: 90,
                ..CourseProgress::default()
            },
            CourseProgress {
                course_id: "b".to_string(),
                progress_percentage: 20.0,
                time_spent_minutes: 15,
                ..CourseProgress::default()
            },
        ];
        store.add_learner(learner);
        store
    }

    #[test]
    fn builds_snapshot_from_progress() {
        let state = LearnerState::read(&store(), "ada").expect("state");

        assert_eq!(state.catalog.len(), 3);
        assert_eq!(state.snapshot.enrolled_courses.len(), 2);
        assert!(state.snapshot.has_completed("a"));
        assert!(!state.snapshot.has_completed("b"));
        assert_eq!(state.snapshot.total_time_spent_minutes, 105);
        assert!(state.progress_for("b").is_some());
        assert!(state.progress_for("c").is_none());
    }

    #[test]
    fn study_time_saturates_instead_of_overflowing() {
        let mut store = store();
        let mut learner = LearnerRecord::new("marathon".to_string());
        learner.enrolled = vec!["a".to_string(), "b".to_string()];
        learner.progress = vec![
            CourseProgress {
                course_id: "a".to_string(),
                time_spent_minutes: u64::MAX,
                ..CourseProgress::default()
            },
            CourseProgress {
                course_id: "b".to_string(),
                time_spent_minutes: 1,
                ..CourseProgress::default()
            },
        ];
        store.add_learner(learner);

        let state = LearnerState::read(&store, "marathon").expect("state");
        assert_eq!(state.snapshot.total_time_spent_minutes, u64::MAX);
    }

    #[test]
    fn unknown_learner_fails_whole_read() {
        assert!(LearnerState::read(&store(), "nobody").is_err());
    }
}
