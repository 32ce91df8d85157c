//! Learning path models

use super::Difficulty;
use serde::{Deserialize, Serialize};

/// A predefined sequence of courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathCandidate {
    /// Unique path id
    pub id: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Overall difficulty of the path
    pub difficulty: Difficulty,
    /// Member course ids, in path order
    #[serde(default)]
    pub courses: Vec<String>,
}

/// A learning path annotated with its ranking score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPath {
    /// The ranked path
    pub path: LearningPathCandidate,
    /// Fraction of member courses the learner is enrolled in
    pub completion_ratio: f64,
    /// Derived score; higher ranks first
    pub score: i32,
}
