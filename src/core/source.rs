//! Read-only data collaborators consumed by the engine
//!
//! Storage, identity and progress tracking live outside the engine. It only
//! sees them through [`LearningDataSource`], so any backend (the TOML
//! [`InMemoryStore`](crate::core::store::InMemoryStore), a database, an HTTP
//! client) can feed it.

use crate::core::error::EngineError;
use crate::core::models::{Course, CourseProgress, LearnerStreak, LearningPathCandidate, Lesson};

/// Read-only access to catalog and learner data
pub trait LearningDataSource {
    /// Full course catalog, in catalog order
    ///
    /// # Errors
    /// Returns [`EngineError::DataUnavailable`] if the catalog cannot be read.
    fn all_courses(&self) -> Result<Vec<Course>, EngineError>;

    /// Courses the learner is enrolled in
    ///
    /// # Errors
    /// Returns [`EngineError::DataUnavailable`] for an unknown learner.
    fn enrolled_courses(&self, learner_id: &str) -> Result<Vec<Course>, EngineError>;

    /// Progress record for one enrolled course, `None` if the learner never opened it
    ///
    /// # Errors
    /// Returns [`EngineError::DataUnavailable`] if the record cannot be read.
    fn course_progress(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> Result<Option<CourseProgress>, EngineError>;

    /// Lessons of a course (any order)
    ///
    /// # Errors
    /// Returns [`EngineError::DataUnavailable`] if the lessons cannot be read.
    fn lessons_for_course(&self, course_id: &str) -> Result<Vec<Lesson>, EngineError>;

    /// All predefined learning paths
    ///
    /// # Errors
    /// Returns [`EngineError::DataUnavailable`] if the paths cannot be read.
    fn learning_paths(&self) -> Result<Vec<LearningPathCandidate>, EngineError>;

    /// Current activity streak of the learner
    ///
    /// # Errors
    /// Returns [`EngineError::DataUnavailable`] for an unknown learner.
    fn learner_streak(&self, learner_id: &str) -> Result<LearnerStreak, EngineError>;
}

/// Catalog cache owned by the caller
///
/// Wraps a source, serves [`LearningDataSource::all_courses`] from memory and
/// delegates everything else. The catalog only changes on [`refresh`](Self::refresh).
#[derive(Debug)]
pub struct CachedCatalog<S> {
    source: S,
    catalog: Vec<Course>,
}

impl<S: LearningDataSource> CachedCatalog<S> {
    /// Wrap a source and load its catalog once
    ///
    /// # Errors
    /// Propagates the source's catalog error.
    pub fn new(source: S) -> Result<Self, EngineError> {
        let catalog = source.all_courses()?;
        Ok(Self { source, catalog })
    }

    /// Reload the catalog from the wrapped source
    ///
    /// On error the previous catalog is kept.
    ///
    /// # Errors
    /// Propagates the source's catalog error.
    pub fn refresh(&mut self) -> Result<usize, EngineError> {
        self.catalog = self.source.all_courses()?;
        crate::debug!("Catalog cache refreshed ({} courses)", self.catalog.len());
        Ok(self.catalog.len())
    }

    /// Cached catalog
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.catalog
    }

    /// The wrapped source
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.source
    }

    /// Mutable access to the wrapped source; call [`refresh`](Self::refresh) after edits
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: LearningDataSource> LearningDataSource for CachedCatalog<S> {
    fn all_courses(&self) -> Result<Vec<Course>, EngineError> {
        Ok(self.catalog.clone())
    }

    fn enrolled_courses(&self, learner_id: &str) -> Result<Vec<Course>, EngineError> {
        self.source.enrolled_courses(learner_id)
    }

    fn course_progress(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> Result<Option<CourseProgress>, EngineError> {
        self.source.course_progress(learner_id, course_id)
    }

    fn lessons_for_course(&self, course_id: &str) -> Result<Vec<Lesson>, EngineError> {
        self.source.lessons_for_course(course_id)
    }

    fn learning_paths(&self) -> Result<Vec<LearningPathCandidate>, EngineError> {
        self.source.learning_paths()
    }

    fn learner_streak(&self, learner_id: &str) -> Result<LearnerStreak, EngineError> {
        self.source.learner_streak(learner_id)
    }
}

impl<T: LearningDataSource + ?Sized> LearningDataSource for &T {
    fn all_courses(&self) -> Result<Vec<Course>, EngineError> {
        (**self).all_courses()
    }

    fn enrolled_courses(&self, learner_id: &str) -> Result<Vec<Course>, EngineError> {
        (**self).enrolled_courses(learner_id)
    }

    fn course_progress(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> Result<Option<CourseProgress>, EngineError> {
        (**self).course_progress(learner_id, course_id)
    }

    fn lessons_for_course(&self, course_id: &str) -> Result<Vec<Lesson>, EngineError> {
        (**self).lessons_for_course(course_id)
    }

    fn learning_paths(&self) -> Result<Vec<LearningPathCandidate>, EngineError> {
        (**self).learning_paths()
    }

    fn learner_streak(&self, learner_id: &str) -> Result<LearnerStreak, EngineError> {
        (**self).learner_streak(learner_id)
    }
}
