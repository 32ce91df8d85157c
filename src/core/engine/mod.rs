//! Recommendation and next-step prioritization engine
//!
//! The engine is stateless: each call reads a fresh learner state from its
//! [`LearningDataSource`], scores it and returns ranked output. Identical
//! inputs always produce identical, identically ordered output.

pub mod next_steps;
pub mod paths;
pub mod ranker;
pub mod reader;
pub mod scorer;
pub mod signals;

use crate::core::error::EngineError;
use crate::core::models::{LearnerStreak, NextStep, RankedPath, Recommendation};
use crate::core::source::LearningDataSource;
use reader::LearnerState;
use scorer::CourseScorer;

/// Number of recommendations returned when the caller has no preference
pub const DEFAULT_LIMIT: i64 = 10;

/// All three advisory lists for one learner, computed from one state read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearnerAdvice {
    /// Ranked course recommendations
    pub recommendations: Vec<Recommendation>,
    /// Ranked next steps
    pub next_steps: Vec<NextStep>,
    /// Ranked learning paths
    pub paths: Vec<RankedPath>,
}

/// Entry point for recommendations, next steps and learning paths
#[derive(Debug, Clone)]
pub struct RecommendationEngine<S> {
    source: S,
}

fn check_limit(limit: i64) -> Result<(), EngineError> {
    if limit < 0 {
        return Err(EngineError::InvalidArgument(format!(
            "limit must not be negative, got {limit}"
        )));
    }
    Ok(())
}

impl<S: LearningDataSource> RecommendationEngine<S> {
    /// Create an engine over a data source
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying data source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the data source (e.g. to refresh a cache)
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn recommend_from(state: &LearnerState, limit: i64) -> Result<Vec<Recommendation>, EngineError> {
        let scorer = CourseScorer::new(&state.snapshot, &state.catalog);
        let candidates = scorer.score_candidates(&state.catalog);
        ranker::rank(candidates, limit)
    }

    fn paths_from(&self, state: &LearnerState, learner_id: &str) -> Result<Vec<RankedPath>, EngineError> {
        let candidates = self.source.learning_paths()?;
        let streak = self.source.learner_streak(learner_id).unwrap_or_else(|e| {
            crate::warn!("Streak unavailable for '{learner_id}', assuming none: {e}");
            LearnerStreak::default()
        });
        Ok(paths::rank_paths(
            &candidates,
            &state.snapshot,
            streak.current_streak_days,
        ))
    }

    /// Ranked course recommendations for a learner
    ///
    /// Only courses the learner is not enrolled in and whose score is strictly
    /// positive are returned, best first, at most `limit` of them.
    ///
    /// # Errors
    /// [`EngineError::InvalidArgument`] for a negative `limit` (checked before
    /// any read); otherwise the first failing collaborator read.
    pub fn get_recommendations(
        &self,
        learner_id: &str,
        limit: i64,
    ) -> Result<Vec<Recommendation>, EngineError> {
        check_limit(limit)?;
        let state = LearnerState::read(&self.source, learner_id)?;
        let recommendations = Self::recommend_from(&state, limit)?;
        crate::info!(
            "Recommended {} of {} catalog courses to '{learner_id}'",
            recommendations.len(),
            state.catalog.len()
        );
        Ok(recommendations)
    }

    /// Ranked next steps (at most five) for a learner
    ///
    /// # Errors
    /// Returns the first failing read of the learner state. Lesson reads that
    /// fail only drop the affected course.
    pub fn get_next_steps(&self, learner_id: &str) -> Result<Vec<NextStep>, EngineError> {
        let state = LearnerState::read(&self.source, learner_id)?;
        Ok(next_steps::build_next_steps(&self.source, &state))
    }

    /// Ranked learning paths (at most five) for a learner
    ///
    /// # Errors
    /// Returns the first failing read of the learner state or the path list.
    /// A failed streak read counts as no streak.
    pub fn get_recommended_paths(&self, learner_id: &str) -> Result<Vec<RankedPath>, EngineError> {
        let state = LearnerState::read(&self.source, learner_id)?;
        self.paths_from(&state, learner_id)
    }

    /// Recommendations, next steps and paths from a single state read
    ///
    /// # Errors
    /// As for the individual operations.
    pub fn advise(&self, learner_id: &str, limit: i64) -> Result<LearnerAdvice, EngineError> {
        check_limit(limit)?;
        let state = LearnerState::read(&self.source, learner_id)?;
        Ok(LearnerAdvice {
            recommendations: Self::recommend_from(&state, limit)?,
            next_steps: next_steps::build_next_steps(&self.source, &state),
            paths: self.paths_from(&state, learner_id)?,
        })
    }

    /// Recommendations for an advisory panel: any error is logged and yields an empty list
    #[must_use]
    pub fn recommendations_or_empty(&self, learner_id: &str, limit: u32) -> Vec<Recommendation> {
        self.get_recommendations(learner_id, i64::from(limit))
            .unwrap_or_else(|e| {
                crate::error!("Recommendations for '{learner_id}' failed: {e}");
                Vec::new()
            })
    }

    /// Next steps for an advisory panel: any error is logged and yields an empty list
    #[must_use]
    pub fn next_steps_or_empty(&self, learner_id: &str) -> Vec<NextStep> {
        self.get_next_steps(learner_id).unwrap_or_else(|e| {
            crate::error!("Next steps for '{learner_id}' failed: {e}");
            Vec::new()
        })
    }

    /// Learning paths for an advisory panel: any error is logged and yields an empty list
    #[must_use]
    pub fn paths_or_empty(&self, learner_id: &str) -> Vec<RankedPath> {
        self.get_recommended_paths(learner_id).unwrap_or_else(|e| {
            crate::error!("Learning paths for '{learner_id}' failed: {e}");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Difficulty};
    use crate::core::store::{InMemoryStore, LearnerRecord};

    fn engine() -> RecommendationEngine<InMemoryStore> {
        let mut store = InMemoryStore::new();
        store.add_course(Course::new(
            "intro".to_string(),
            "Intro".to_string(),
            Difficulty::Beginner,
            3.0,
        ));
        store.add_learner(LearnerRecord::new("new".to_string()));
        RecommendationEngine::new(store)
    }

    #[test]
    fn negative_limit_fails_before_reading() {
        let err = engine()
            .get_recommendations("unknown-learner", -3)
            .expect_err("invalid limit");
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn unknown_learner_surfaces_and_panels_stay_empty() {
        let engine = engine();
        assert!(engine.get_recommendations("ghost", 10).is_err());
        assert!(engine.recommendations_or_empty("ghost", 10).is_empty());
        assert!(engine.next_steps_or_empty("ghost").is_empty());
        assert!(engine.paths_or_empty("ghost").is_empty());
    }

    #[test]
    fn advise_bundles_all_lists() {
        let advice = engine().advise("new", 10).expect("advice");
        assert_eq!(advice.recommendations.len(), 1);
        assert!(advice.next_steps.is_empty());
        assert!(advice.paths.is_empty());
    }
}
