//! Course model

use crate::core::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a course, ordered beginner < intermediate < advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level (ordinal 1)
    Beginner,
    /// Intermediate level (ordinal 2)
    Intermediate,
    /// Advanced level (ordinal 3)
    Advanced,
}

impl Difficulty {
    /// Ordinal value used in difficulty arithmetic (1, 2 or 3)
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Aggregate learner rating of a course
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Mean rating, 0.0 to 5.0
    #[serde(default)]
    pub average: f64,
    /// Number of ratings behind the average
    #[serde(default)]
    pub count: u32,
}

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course id (e.g., "rust-101")
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Categories the course belongs to, in catalog order
    #[serde(default)]
    pub category: Vec<String>,

    /// Free-form topic tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Difficulty level
    pub difficulty: Difficulty,

    /// Prerequisites as course ids
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Number of learners enrolled
    #[serde(default)]
    pub enrolled_count: u32,

    /// Learner rating
    #[serde(default)]
    pub rating: Rating,

    /// Duration in hours
    pub duration_hours: f64,
}

impl Course {
    /// Create a new course with no categories, tags or prerequisites
    ///
    /// # Arguments
    /// * `id` - Unique course id
    /// * `title` - Display title
    /// * `difficulty` - Difficulty level
    /// * `duration_hours` - Length of the course in hours
    #[must_use]
    pub const fn new(id: String, title: String, difficulty: Difficulty, duration_hours: f64) -> Self {
        Self {
            id,
            title,
            category: Vec::new(),
            tags: Vec::new(),
            difficulty,
            prerequisites: Vec::new(),
            enrolled_count: 0,
            rating: Rating {
                average: 0.0,
                count: 0,
            },
            duration_hours,
        }
    }

    /// Add a prerequisite by course id
    pub fn add_prerequisite(&mut self, prereq_id: String) {
        if !self.prerequisites.contains(&prereq_id) {
            self.prerequisites.push(prereq_id);
        }
    }

    /// Add a category
    pub fn add_category(&mut self, category: String) {
        if !self.category.contains(&category) {
            self.category.push(category);
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Whether the course declares any prerequisites
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Check the record is usable for scoring
    ///
    /// # Errors
    /// Returns [`EngineError::DataUnavailable`] for an empty id, a non-positive
    /// duration or a rating outside 0.0 to 5.0.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.id.trim().is_empty() {
            return Err(EngineError::unavailable("course with empty id"));
        }
        if self.duration_hours.is_nan() || self.duration_hours <= 0.0 {
            return Err(EngineError::unavailable(format!(
                "course '{}' has non-positive duration {}",
                self.id, self.duration_hours
            )));
        }
        if !(0.0..=5.0).contains(&self.rating.average) {
            return Err(EngineError::unavailable(format!(
                "course '{}' has rating {} outside 0.0-5.0",
                self.id, self.rating.average
            )));
        }
        Ok(())
    }
}
