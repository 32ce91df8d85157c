//! Recommendation ranking

use super::scorer::ScoredCourse;
use crate::core::error::EngineError;
use crate::core::models::Recommendation;

/// Sort scored candidates by score (highest first) and keep the top `limit`
///
/// The sort is stable, so equal scores keep catalog order. `limit == 0`
/// yields an empty list.
///
/// Accepts unfiltered candidates: non-positive scores are dropped here even
/// though [`CourseScorer::score_candidates`](super::scorer::CourseScorer::score_candidates)
/// already skips them, since callers may build `ScoredCourse` lists themselves.
///
/// # Errors
/// Returns [`EngineError::InvalidArgument`] if `limit` is negative.
pub fn rank(candidates: Vec<ScoredCourse<'_>>, limit: i64) -> Result<Vec<Recommendation>, EngineError> {
    let limit = usize::try_from(limit).map_err(|_| {
        EngineError::InvalidArgument(format!("limit must not be negative, got {limit}"))
    })?;

    let mut ranked: Vec<ScoredCourse<'_>> = candidates
        .into_iter()
        .filter(ScoredCourse::is_recommendable)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);

    Ok(ranked
        .into_iter()
        .map(|scored| Recommendation {
            reason: scored.primary_reason().to_string(),
            course: scored.course.clone(),
            score: scored.score,
            kind: scored.kind,
        })
        .collect())
}
