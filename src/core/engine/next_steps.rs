//! Next-step aggregation over enrolled courses
//!
//! Three families of steps are built per enrolled course, merged, ranked by
//! priority and capped at [`MAX_NEXT_STEPS`]:
//! - continue: course in progress, next unfinished lesson, priority `100 + progress`
//! - start: course not started, first lesson, priority 50
//! - quiz: every unfinished lesson with a quiz, priority 30
//!
//! Finished courses contribute nothing.

use super::reader::LearnerState;
use crate::core::models::{Course, CourseProgress, Lesson, NextStep, NextStepType};
use crate::core::source::LearningDataSource;
use std::collections::HashSet;

/// Maximum number of next steps returned
pub const MAX_NEXT_STEPS: usize = 5;

const CONTINUE_BASE_PRIORITY: i32 = 100;
const START_PRIORITY: i32 = 50;
const QUIZ_PRIORITY: i32 = 30;

/// Priority of a continue step; grows with progress so nearly finished courses lead
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn continue_priority(progress_percentage: f64) -> i32 {
    let progress = if progress_percentage.is_nan() {
        0.0
    } else {
        progress_percentage.clamp(0.0, 100.0)
    };
    CONTINUE_BASE_PRIORITY + progress.round() as i32
}

fn lesson_label(lesson: &Lesson) -> &str {
    if lesson.title.is_empty() {
        &lesson.id
    } else {
        &lesson.title
    }
}

fn course_label(course: &Course) -> &str {
    if course.title.is_empty() {
        &course.id
    } else {
        &course.title
    }
}

/// Steps contributed by a single enrolled course
///
/// `lessons` may be in any order; they are ordered by `order` here.
#[must_use]
pub fn steps_for_course(
    course: &Course,
    progress: Option<&CourseProgress>,
    lessons: &[Lesson],
) -> Vec<NextStep> {
    if progress.is_some_and(CourseProgress::is_finished) {
        return Vec::new();
    }

    let mut ordered: Vec<&Lesson> = lessons.iter().collect();
    ordered.sort_by_key(|l| l.order);

    let is_done = |lesson: &Lesson| progress.is_some_and(|p| p.has_completed_lesson(&lesson.id));
    let percentage = progress.map_or(0.0, |p| p.progress_percentage);
    let title = course_label(course);
    let mut steps = Vec::new();

    if percentage > 0.0 {
        if let Some(lesson) = ordered.iter().find(|&&l| !is_done(l)) {
            steps.push(NextStep {
                course_id: Some(course.id.clone()),
                lesson_id: Some(lesson.id.clone()),
                kind: NextStepType::ContinueCourse,
                title: format!("Continue {title}"),
                description: format!(
                    "Pick up at \"{}\" ({percentage:.0}% complete)",
                    lesson_label(lesson)
                ),
                priority: continue_priority(percentage),
            });
        }
    } else {
        let first = ordered.first();
        steps.push(NextStep {
            course_id: Some(course.id.clone()),
            lesson_id: first.map(|l| l.id.clone()),
            kind: NextStepType::StartCourse,
            title: format!("Start {title}"),
            description: first.map_or_else(
                || "Begin this course".to_string(),
                |l| format!("Begin with \"{}\"", lesson_label(l)),
            ),
            priority: START_PRIORITY,
        });
    }

    for lesson in ordered
        .iter()
        .filter(|&&l| l.quiz_id.is_some() && !is_done(l))
    {
        steps.push(NextStep {
            course_id: Some(course.id.clone()),
            lesson_id: Some(lesson.id.clone()),
            kind: NextStepType::TakeQuiz,
            title: format!("Take the quiz for \"{}\"", lesson_label(lesson)),
            description: format!("Check your understanding of {title}"),
            priority: QUIZ_PRIORITY,
        });
    }

    steps
}

/// Merge, de-duplicate and rank steps, keeping the top [`MAX_NEXT_STEPS`]
///
/// The sort is stable, so equal priorities keep input order.
#[must_use]
pub fn rank_steps(steps: Vec<NextStep>) -> Vec<NextStep> {
    let mut seen = HashSet::new();
    let mut unique: Vec<NextStep> = steps
        .into_iter()
        .filter(|step| seen.insert(step.key()))
        .collect();
    unique.sort_by(|a, b| b.priority.cmp(&a.priority));
    unique.truncate(MAX_NEXT_STEPS);
    unique
}

/// Build the ranked next steps for a learner
///
/// A course whose lessons cannot be read is skipped; the rest still rank.
pub fn build_next_steps<S: LearningDataSource + ?Sized>(
    source: &S,
    state: &LearnerState,
) -> Vec<NextStep> {
    let mut steps = Vec::new();
    for course in &state.snapshot.enrolled_courses {
        let progress = state.progress_for(&course.id);
        if progress.is_some_and(CourseProgress::is_finished) {
            continue;
        }
        match source.lessons_for_course(&course.id) {
            Ok(lessons) => steps.extend(steps_for_course(course, progress, &lessons)),
            Err(e) => crate::warn!("Skipping next steps for course '{}': {e}", course.id),
        }
    }
    let total = steps.len();
    let ranked = rank_steps(steps);
    crate::debug!("Built {total} candidate next steps, kept {}", ranked.len());
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Difficulty;

    fn course(id: &str) -> Course {
        Course::new(id.to_string(), format!("Course {id}"), Difficulty::Beginner, 1.0)
    }

    fn lesson(course_id: &str, n: u32, quiz: bool) -> Lesson {
        Lesson {
            id: format!("{course_id}-l{n}"),
            course_id: course_id.to_string(),
            title: format!("Lesson {n}"),
            order: n,
            quiz_id: quiz.then(|| format!("{course_id}-q{n}")),
        }
    }

    fn progress(course_id: &str, pct: f64, done: &[&str]) -> CourseProgress {
        CourseProgress {
            course_id: course_id.to_string(),
            completed: false,
            progress_percentage: pct,
            completed_lesson_ids: done.iter().map(|s| (*s).to_string()).collect(),
            time_spent_minutes: 0,
        }
    }

    #[test]
    fn continue_targets_first_unfinished_lesson_by_order() {
        let lessons = vec![lesson("x", 3, false), lesson("x", 1, false), lesson("x", 2, false)];
        let p = progress("x", 40.0, &["x-l1"]);

        let steps = steps_for_course(&course("x"), Some(&p), &lessons);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, NextStepType::ContinueCourse);
        assert_eq!(steps[0].lesson_id.as_deref(), Some("x-l2"));
        assert_eq!(steps[0].priority, 140);
    }

    #[test]
    fn unstarted_course_starts_at_first_lesson() {
        let lessons = vec![lesson("y", 2, false), lesson("y", 1, false)];

        let steps = steps_for_course(&course("y"), None, &lessons);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, NextStepType::StartCourse);
        assert_eq!(steps[0].lesson_id.as_deref(), Some("y-l1"));
        assert_eq!(steps[0].priority, 50);
    }

    #[test]
    fn course_without_lessons_still_offers_a_start() {
        let steps = steps_for_course(&course("empty"), None, &[]);
        assert_eq!(steps.len(), 1);
        assert!(steps[0].lesson_id.is_none());
        assert_eq!(steps[0].description, "Begin this course");
    }

    #[test]
    fn quizzes_only_for_unfinished_lessons() {
        let lessons = vec![lesson("q", 1, true), lesson("q", 2, true), lesson("q", 3, false)];
        let p = progress("q", 30.0, &["q-l1"]);

        let steps = steps_for_course(&course("q"), Some(&p), &lessons);
        let quizzes: Vec<_> = steps
            .iter()
            .filter(|s| s.kind == NextStepType::TakeQuiz)
            .collect();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].lesson_id.as_deref(), Some("q-l2"));
        assert_eq!(quizzes[0].priority, 30);
    }

    #[test]
    fn finished_course_contributes_nothing() {
        let lessons = vec![lesson("f", 1, true)];
        let mut p = progress("f", 100.0, &[]);
        assert!(steps_for_course(&course("f"), Some(&p), &lessons).is_empty());

        p.progress_percentage = 60.0;
        p.completed = true;
        assert!(steps_for_course(&course("f"), Some(&p), &lessons).is_empty());
    }

    #[test]
    fn continue_priority_grows_with_progress() {
        assert!(continue_priority(80.0) > continue_priority(20.0));
        assert!(continue_priority(1.0) > START_PRIORITY);
        assert_eq!(continue_priority(150.0), 200);
        assert_eq!(continue_priority(f64::NAN), 100);
    }

    #[test]
    fn rank_steps_dedups_sorts_and_caps() {
        let lessons: Vec<Lesson> = (1..=6).map(|n| lesson("z", n, true)).collect();
        let mut steps = steps_for_course(&course("z"), None, &lessons);
        steps.extend(steps.clone());

        let ranked = rank_steps(steps);
        assert_eq!(ranked.len(), MAX_NEXT_STEPS);
        assert_eq!(ranked[0].kind, NextStepType::StartCourse);
        let keys: HashSet<_> = ranked.iter().map(NextStep::key).collect();
        assert_eq!(keys.len(), ranked.len());
        // Ties keep lesson order
        assert_eq!(ranked[1].lesson_id.as_deref(), Some("z-l1"));
        assert_eq!(ranked[4].lesson_id.as_deref(), Some("z-l4"));
    }
}
