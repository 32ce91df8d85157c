//! Learner-side records: lessons, progress, streaks and the scoring snapshot

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A lesson inside a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique lesson id
    pub id: String,
    /// Course the lesson belongs to
    pub course_id: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Position within the course (ascending)
    pub order: u32,
    /// Attached quiz, if any
    #[serde(default)]
    pub quiz_id: Option<String>,
}

/// A learner's progress through one course
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Course this record belongs to
    pub course_id: String,
    /// Whether the course has been finished
    #[serde(default)]
    pub completed: bool,
    /// Percent complete, 0 to 100
    #[serde(default)]
    pub progress_percentage: f64,
    /// Lessons the learner has finished
    #[serde(default)]
    pub completed_lesson_ids: Vec<String>,
    /// Minutes spent in this course
    #[serde(default)]
    pub time_spent_minutes: u64,
}

impl CourseProgress {
    /// Finished either explicitly or by reaching 100%
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completed || self.progress_percentage >= 100.0
    }

    /// Whether the given lesson has been completed
    #[must_use]
    pub fn has_completed_lesson(&self, lesson_id: &str) -> bool {
        self.completed_lesson_ids.iter().any(|id| id == lesson_id)
    }
}

/// Consecutive-day activity streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearnerStreak {
    /// Days in the current streak
    pub current_streak_days: u32,
}

/// Everything the scorer needs about a learner, read once per call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearnerSnapshot {
    /// Courses the learner is enrolled in, in enrollment order
    pub enrolled_courses: Vec<Course>,
    /// Ids of enrolled courses the learner has completed
    pub completed_course_ids: HashSet<String>,
    /// Total minutes spent learning across all courses
    pub total_time_spent_minutes: u64,
}

impl LearnerSnapshot {
    /// Whether the learner is enrolled in the course
    #[must_use]
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c.id == course_id)
    }

    /// Whether the learner has completed the course
    #[must_use]
    pub fn has_completed(&self, course_id: &str) -> bool {
        self.completed_course_ids.contains(course_id)
    }

    /// Ids of enrolled courses
    #[must_use]
    pub fn enrolled_ids(&self) -> HashSet<&str> {
        self.enrolled_courses.iter().map(|c| c.id.as_str()).collect()
    }
}
