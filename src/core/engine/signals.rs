//! Signal extraction: intermediate facts derived from a learner snapshot

use crate::core::models::{Course, LearnerSnapshot};
use std::collections::HashSet;

/// Facts the scorer evaluates its rules against
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearnerSignals<'a> {
    /// Catalog courses the learner has completed, in catalog order
    pub completed_courses: Vec<&'a Course>,
    /// Rounded mean difficulty ordinal of completed courses; 0 means no history
    pub average_completed_difficulty: u8,
    /// Union of categories over enrolled courses
    pub enrolled_categories: HashSet<&'a str>,
    /// Union of categories over completed courses
    pub completed_categories: HashSet<&'a str>,
    /// Union of tags over completed courses
    pub completed_tags: HashSet<&'a str>,
    /// Total minutes spent learning
    pub total_time_spent_minutes: u64,
}

impl<'a> LearnerSignals<'a> {
    /// Derive signals from a snapshot and the catalog
    ///
    /// Pure and infallible: empty inputs give empty sets and a zero difficulty.
    #[must_use]
    pub fn extract(snapshot: &'a LearnerSnapshot, catalog: &'a [Course]) -> Self {
        let completed_courses: Vec<&Course> = catalog
            .iter()
            .filter(|c| snapshot.has_completed(&c.id))
            .collect();

        let enrolled_categories = snapshot
            .enrolled_courses
            .iter()
            .flat_map(|c| c.category.iter().map(String::as_str))
            .collect();

        let completed_categories = completed_courses
            .iter()
            .flat_map(|c| c.category.iter().map(String::as_str))
            .collect();

        let completed_tags = completed_courses
            .iter()
            .flat_map(|c| c.tags.iter().map(String::as_str))
            .collect();

        Self {
            average_completed_difficulty: average_difficulty(&completed_courses),
            completed_courses,
            enrolled_categories,
            completed_categories,
            completed_tags,
            total_time_spent_minutes: snapshot.total_time_spent_minutes,
        }
    }

    /// Whether the learner has any completed course
    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.completed_courses.is_empty()
    }
}

/// Mean difficulty ordinal rounded half up, 0 for no courses
fn average_difficulty(courses: &[&Course]) -> u8 {
    if courses.is_empty() {
        return 0;
    }
    let sum: usize = courses
        .iter()
        .map(|c| usize::from(c.difficulty.ordinal()))
        .sum();
    let count = courses.len();
    let rounded = (2 * sum + count) / (2 * count);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}
