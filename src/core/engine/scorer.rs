//! Course scoring
//!
//! Every candidate course is scored by a fixed set of independent additive
//! rules. A rule adds nothing when its precondition is false. Rules are listed
//! below in the order used to pick the single reason shown to the learner.
//!
//! | Rule | Points |
//! |---|---|
//! | prerequisites all completed | +50 |
//! | prerequisites unmet | -30 |
//! | shares a category with a completed course | +30 |
//! | shares a tag with a completed course | +20 |
//! | one difficulty level above completed average | +25 |
//! | more than one level above completed average | -15 |
//! | no history and beginner course | +20 |
//! | more than 100 enrolled | +15 |
//! | rated 4.5 or higher | +20 |
//! | under an hour studied and course at most 2 hours | +10 |
//! | shares a category with an enrolled course | +15 |

use super::signals::LearnerSignals;
use crate::core::models::{Course, Difficulty, LearnerSnapshot, RecommendationType};
use std::collections::HashSet;

const PREREQUISITES_MET_POINTS: i32 = 50;
const PREREQUISITES_UNMET_POINTS: i32 = -30;
const SIMILAR_CATEGORY_POINTS: i32 = 30;
const SIMILAR_TAG_POINTS: i32 = 20;
const DIFFICULTY_STEP_UP_POINTS: i32 = 25;
const DIFFICULTY_OVERSHOOT_POINTS: i32 = -15;
const BEGINNER_ENTRY_POINTS: i32 = 20;
const POPULAR_POINTS: i32 = 15;
const HIGHLY_RATED_POINTS: i32 = 20;
const QUICK_WIN_POINTS: i32 = 10;
const INTEREST_MATCH_POINTS: i32 = 15;

/// Enrollment count above which a course counts as popular
pub const POPULAR_ENROLLMENT_THRESHOLD: u32 = 100;
const HIGHLY_RATED_THRESHOLD: f64 = 4.5;
const QUICK_WIN_MAX_STUDY_MINUTES: u64 = 60;
const QUICK_WIN_MAX_HOURS: f64 = 2.0;

/// Reason shown when prerequisites are all completed
pub const REASON_PREREQUISITES: &str = "You've completed all prerequisites";
/// Reason shown for a one-level difficulty step
pub const REASON_NEXT_DIFFICULTY: &str = "Perfect next step in difficulty";
/// Reason shown to learners without history for beginner courses
pub const REASON_STARTING_POINT: &str = "Great starting point";
/// Reason shown for popular courses
pub const REASON_POPULAR: &str = "Popular choice";
/// Reason shown for highly rated courses
pub const REASON_HIGHLY_RATED: &str = "Highly rated";
/// Reason shown for short courses to new learners
pub const REASON_QUICK: &str = "Quick course";
/// Reason shown for category overlap with enrolled courses
pub const REASON_INTERESTS: &str = "Matches your interests";
/// Reason shown when only tag overlap explains the match
pub const REASON_SHARED_TOPICS: &str = "Covers topics you've studied";
/// Reason shown when no reason-bearing rule fired
pub const REASON_DEFAULT: &str = "Recommended for you";

/// Outcome of the prerequisite check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrerequisiteStatus {
    /// The course declares no prerequisites
    None,
    /// Every prerequisite is completed
    Satisfied,
    /// At least one prerequisite is not completed (or does not resolve)
    Unmet,
}

/// A candidate course with its score and contributing reasons
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCourse<'a> {
    /// The candidate
    pub course: &'a Course,
    /// Summed rule points
    pub score: i32,
    /// Reasons of the rules that fired, most significant first
    pub reasons: Vec<String>,
    /// Classification
    pub kind: RecommendationType,
}

impl ScoredCourse<'_> {
    /// The reason shown to the learner
    #[must_use]
    pub fn primary_reason(&self) -> &str {
        self.reasons.first().map_or(REASON_DEFAULT, String::as_str)
    }

    /// Only strictly positive scores are recommended
    #[must_use]
    pub const fn is_recommendable(&self) -> bool {
        self.score > 0
    }
}

/// Scores candidate courses for one learner
#[derive(Debug, Clone)]
pub struct CourseScorer<'a> {
    snapshot: &'a LearnerSnapshot,
    signals: LearnerSignals<'a>,
    catalog_ids: HashSet<&'a str>,
}

impl<'a> CourseScorer<'a> {
    /// Build a scorer from a learner snapshot and the catalog
    #[must_use]
    pub fn new(snapshot: &'a LearnerSnapshot, catalog: &'a [Course]) -> Self {
        Self {
            snapshot,
            signals: LearnerSignals::extract(snapshot, catalog),
            catalog_ids: catalog.iter().map(|c| c.id.as_str()).collect(),
        }
    }

    /// Signals the rules are evaluated against
    #[must_use]
    pub const fn signals(&self) -> &LearnerSignals<'a> {
        &self.signals
    }

    /// Check a course's prerequisites against the completed set
    ///
    /// Prerequisite ids missing from the catalog count as not completed unless
    /// the learner has them on record.
    #[must_use]
    pub fn prerequisite_status(&self, course: &Course) -> PrerequisiteStatus {
        if !course.has_prerequisites() {
            return PrerequisiteStatus::None;
        }
        let mut satisfied = true;
        for prereq in &course.prerequisites {
            if self.snapshot.has_completed(prereq) {
                continue;
            }
            if !self.catalog_ids.contains(prereq.as_str()) {
                crate::debug!(
                    "Course '{}' references unknown prerequisite '{prereq}', treating as unmet",
                    course.id
                );
            }
            satisfied = false;
        }
        if satisfied {
            PrerequisiteStatus::Satisfied
        } else {
            PrerequisiteStatus::Unmet
        }
    }

    /// Score a single course
    #[must_use]
    pub fn score(&self, course: &'a Course) -> ScoredCourse<'a> {
        let signals = &self.signals;
        let mut score = 0;
        let mut reasons = Vec::new();

        let prerequisites = self.prerequisite_status(course);
        match prerequisites {
            PrerequisiteStatus::Satisfied => {
                score += PREREQUISITES_MET_POINTS;
                reasons.push(REASON_PREREQUISITES.to_string());
            }
            PrerequisiteStatus::Unmet => score += PREREQUISITES_UNMET_POINTS,
            PrerequisiteStatus::None => {}
        }

        let mut shares_tag = false;
        if signals.has_history() {
            if let Some(category) = course
                .category
                .iter()
                .find(|c| signals.completed_categories.contains(c.as_str()))
            {
                score += SIMILAR_CATEGORY_POINTS;
                reasons.push(format!(
                    "Similar to courses you've completed in {category}"
                ));
            }

            if course
                .tags
                .iter()
                .any(|t| signals.completed_tags.contains(t.as_str()))
            {
                score += SIMILAR_TAG_POINTS;
                shares_tag = true;
            }

            let level = course.difficulty.ordinal();
            let step = signals.average_completed_difficulty.saturating_add(1);
            if level == step {
                score += DIFFICULTY_STEP_UP_POINTS;
                reasons.push(REASON_NEXT_DIFFICULTY.to_string());
            } else if level > step {
                score += DIFFICULTY_OVERSHOOT_POINTS;
            }
        } else if course.difficulty == Difficulty::Beginner {
            score += BEGINNER_ENTRY_POINTS;
            reasons.push(REASON_STARTING_POINT.to_string());
        }

        if course.enrolled_count > POPULAR_ENROLLMENT_THRESHOLD {
            score += POPULAR_POINTS;
            reasons.push(REASON_POPULAR.to_string());
        }

        if course.rating.average >= HIGHLY_RATED_THRESHOLD {
            score += HIGHLY_RATED_POINTS;
            reasons.push(REASON_HIGHLY_RATED.to_string());
        }

        if signals.total_time_spent_minutes < QUICK_WIN_MAX_STUDY_MINUTES
            && course.duration_hours <= QUICK_WIN_MAX_HOURS
        {
            score += QUICK_WIN_POINTS;
            reasons.push(REASON_QUICK.to_string());
        }

        let matches_interests = course
            .category
            .iter()
            .any(|c| signals.enrolled_categories.contains(c.as_str()));
        if matches_interests {
            score += INTEREST_MATCH_POINTS;
            reasons.push(REASON_INTERESTS.to_string());
        }

        // Tag overlap only explains a match when nothing else does.
        if shares_tag && reasons.is_empty() {
            reasons.push(REASON_SHARED_TOPICS.to_string());
        }

        let kind = if prerequisites == PrerequisiteStatus::Satisfied {
            RecommendationType::Prerequisite
        } else if matches_interests {
            RecommendationType::Similar
        } else if course.enrolled_count > POPULAR_ENROLLMENT_THRESHOLD {
            RecommendationType::Popular
        } else {
            RecommendationType::NextStep
        };

        ScoredCourse {
            course,
            score,
            reasons,
            kind,
        }
    }

    /// Score every candidate in the catalog
    ///
    /// Skips enrolled courses and malformed records, and drops candidates whose
    /// score is not strictly positive. Catalog order is preserved.
    #[must_use]
    pub fn score_candidates(&self, catalog: &'a [Course]) -> Vec<ScoredCourse<'a>> {
        catalog
            .iter()
            .filter(|course| !self.snapshot.is_enrolled(&course.id))
            .filter(|course| match course.validate() {
                Ok(()) => true,
                Err(e) => {
                    crate::warn!("Skipping candidate: {e}");
                    false
                }
            })
            .map(|course| self.score(course))
            .filter(ScoredCourse::is_recommendable)
            .collect()
    }
}
