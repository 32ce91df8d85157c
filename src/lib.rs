//! Library for `NuAdvisor`
//! Ranks course recommendations, next steps and learning paths for a learner.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::engine::RecommendationEngine;
pub use crate::core::error::EngineError;

/// Returns the current version of the `NuAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
