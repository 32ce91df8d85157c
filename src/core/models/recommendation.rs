//! Engine outputs: course recommendations and next-step actions

use super::Course;
use serde::Serialize;
use std::fmt;

/// Why a course was recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Shares a category with the learner's enrolled courses
    Similar,
    /// All prerequisites are completed
    Prerequisite,
    /// Fallback: a reasonable next course
    NextStep,
    /// Many learners are enrolled
    Popular,
    /// Gaining enrollments recently
    Trending,
    /// Finishes something the learner started
    Completion,
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Similar => "similar",
            Self::Prerequisite => "prerequisite",
            Self::NextStep => "next_step",
            Self::Popular => "popular",
            Self::Trending => "trending",
            Self::Completion => "completion",
        };
        write!(f, "{label}")
    }
}

/// A ranked course recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Recommended course
    pub course: Course,
    /// The single most significant reason, shown to the learner
    pub reason: String,
    /// Summed rule score (always > 0 in engine output)
    pub score: i32,
    /// Classification of the recommendation
    #[serde(rename = "type")]
    pub kind: RecommendationType,
}

/// Kind of next-step action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStepType {
    /// Resume a course already in progress
    ContinueCourse,
    /// Begin an enrolled course
    StartCourse,
    /// Finish a specific lesson
    CompleteLesson,
    /// Take a lesson's quiz
    TakeQuiz,
}

impl fmt::Display for NextStepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ContinueCourse => "continue_course",
            Self::StartCourse => "start_course",
            Self::CompleteLesson => "complete_lesson",
            Self::TakeQuiz => "take_quiz",
        };
        write!(f, "{label}")
    }
}

/// Identity of a next step, used for de-duplication
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepKey {
    /// Course the step refers to
    pub course_id: Option<String>,
    /// Lesson the step refers to
    pub lesson_id: Option<String>,
    /// Kind of step
    pub kind: NextStepType,
}

/// An action the learner should take next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStep {
    /// Course the step refers to
    pub course_id: Option<String>,
    /// Lesson the step refers to
    pub lesson_id: Option<String>,
    /// Kind of step
    #[serde(rename = "type")]
    pub kind: NextStepType,
    /// Short title for display
    pub title: String,
    /// Longer description for display
    pub description: String,
    /// Ordering key, higher first; never shown to the learner
    #[serde(skip)]
    pub priority: i32,
}

impl NextStep {
    /// De-duplication key of this step
    #[must_use]
    pub fn key(&self) -> StepKey {
        StepKey {
            course_id: self.course_id.clone(),
            lesson_id: self.lesson_id.clone(),
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_keys_distinguish_ids_containing_separators() {
        let a = StepKey {
            course_id: Some("a:b".to_string()),
            lesson_id: Some("c".to_string()),
            kind: NextStepType::TakeQuiz,
        };
        let b = StepKey {
            course_id: Some("a".to_string()),
            lesson_id: Some("b:c".to_string()),
            kind: NextStepType::TakeQuiz,
        };
        assert_ne!(a, b);
    }

    #[test]
    fn type_labels_match_wire_names() {
        assert_eq!(RecommendationType::NextStep.to_string(), "next_step");
        assert_eq!(NextStepType::ContinueCourse.to_string(), "continue_course");
    }
}
