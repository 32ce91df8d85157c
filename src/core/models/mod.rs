//! Data models for `NuAdvisor`

pub mod course;
pub mod learner;
pub mod path;
pub mod recommendation;

pub use course::{Course, Difficulty, Rating};
pub use learner::{CourseProgress, LearnerSnapshot, LearnerStreak, Lesson};
pub use path::{LearningPathCandidate, RankedPath};
pub use recommendation::{NextStep, NextStepType, Recommendation, RecommendationType, StepKey};
