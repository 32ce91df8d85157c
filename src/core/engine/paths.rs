//! Learning-path ranking
//!
//! A path scores +50 while in progress, +20 when not started, plus 30 for
//! beginner paths while the learner's streak is under a week. Paths whose
//! member courses are all enrolled are dropped.

use crate::core::models::{Difficulty, LearnerSnapshot, LearningPathCandidate, RankedPath};
use std::collections::HashSet;

/// Maximum number of ranked paths returned
pub const MAX_RANKED_PATHS: usize = 5;

const IN_PROGRESS_POINTS: i32 = 50;
const NOT_STARTED_POINTS: i32 = 20;
const BEGINNER_BOOST_POINTS: i32 = 30;
const BEGINNER_BOOST_MAX_STREAK_DAYS: u32 = 7;

/// Fraction of a path's member courses the learner is enrolled in (0 for empty paths)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn completion_ratio(path: &LearningPathCandidate, enrolled: &HashSet<&str>) -> f64 {
    if path.courses.is_empty() {
        return 0.0;
    }
    let members = path
        .courses
        .iter()
        .filter(|id| enrolled.contains(id.as_str()))
        .count();
    members as f64 / path.courses.len() as f64
}

/// Score one path; `None` when the path is already complete
#[must_use]
pub fn score_path(
    path: &LearningPathCandidate,
    enrolled: &HashSet<&str>,
    streak_days: u32,
) -> Option<RankedPath> {
    let ratio = completion_ratio(path, enrolled);
    if ratio >= 1.0 {
        return None;
    }
    let mut score = if ratio > 0.0 {
        IN_PROGRESS_POINTS
    } else {
        NOT_STARTED_POINTS
    };
    if path.difficulty == Difficulty::Beginner && streak_days < BEGINNER_BOOST_MAX_STREAK_DAYS {
        score += BEGINNER_BOOST_POINTS;
    }
    Some(RankedPath {
        path: path.clone(),
        completion_ratio: ratio,
        score,
    })
}

/// Rank learning paths for a learner, best first, capped at [`MAX_RANKED_PATHS`]
///
/// Equal scores keep the input order.
#[must_use]
pub fn rank_paths(
    paths: &[LearningPathCandidate],
    snapshot: &LearnerSnapshot,
    streak_days: u32,
) -> Vec<RankedPath> {
    let enrolled = snapshot.enrolled_ids();
    let mut ranked: Vec<RankedPath> = paths
        .iter()
        .filter_map(|path| score_path(path, &enrolled, streak_days))
        .filter(|ranked| ranked.score > 0)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_RANKED_PATHS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn path(id: &str, difficulty: Difficulty, courses: &[&str]) -> LearningPathCandidate {
        LearningPathCandidate {
            id: id.to_string(),
            title: id.to_uppercase(),
            difficulty,
            courses: courses.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    fn enrolled_in(ids: &[&str]) -> LearnerSnapshot {
        LearnerSnapshot {
            enrolled_courses: ids
                .iter()
                .map(|id| Course::new((*id).to_string(), String::new(), Difficulty::Beginner, 1.0))
                .collect(),
            ..LearnerSnapshot::default()
        }
    }

    #[test]
    fn ratio_handles_empty_paths() {
        let empty = path("empty", Difficulty::Advanced, &[]);
        assert!(completion_ratio(&empty, &HashSet::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn in_progress_outranks_not_started() {
        let paths = vec![
            path("fresh", Difficulty::Intermediate, &["x", "y"]),
            path("half", Difficulty::Intermediate, &["a", "b"]),
        ];
        let ranked = rank_paths(&paths, &enrolled_in(&["a"]), 30);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].path.id, "half");
        assert_eq!(ranked[0].score, 50);
        assert!((ranked[0].completion_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(ranked[1].score, 20);
    }

    #[test]
    fn completed_paths_are_excluded_even_for_beginners() {
        let paths = vec![path("done", Difficulty::Beginner, &["a", "b"])];
        assert!(rank_paths(&paths, &enrolled_in(&["a", "b"]), 0).is_empty());
    }

    #[test]
    fn beginner_boost_depends_on_streak() {
        let paths = vec![path("intro", Difficulty::Beginner, &["a"])];
        let snapshot = enrolled_in(&[]);

        assert_eq!(rank_paths(&paths, &snapshot, 6)[0].score, 50);
        assert_eq!(rank_paths(&paths, &snapshot, 7)[0].score, 20);
    }

    #[test]
    fn caps_at_five_and_keeps_input_order_on_ties() {
        let paths: Vec<_> = (0..8)
            .map(|n| path(&format!("p{n}"), Difficulty::Advanced, &["z"]))
            .collect();
        let ranked = rank_paths(&paths, &enrolled_in(&[]), 0);

        let ids: Vec<&str> = ranked.iter().map(|r| r.path.id.as_str()).collect();
        assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4"]);
    }
}
