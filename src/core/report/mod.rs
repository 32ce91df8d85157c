//! Advisory report generation
//!
//! Renders a learner's recommendations, next steps and learning paths to
//! Markdown or HTML through askama templates under `templates/`.

pub mod formats;

use crate::core::engine::LearnerAdvice;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One recommendation row, pre-formatted for templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRow {
    /// 1-based rank
    pub rank: usize,
    /// Course id
    pub course_id: String,
    /// Course title
    pub title: String,
    /// Score
    pub score: i32,
    /// Recommendation type label
    pub kind: String,
    /// Primary reason
    pub reason: String,
}

/// One next-step row, pre-formatted for templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    /// 1-based rank
    pub rank: usize,
    /// Step type label
    pub kind: String,
    /// Step title
    pub title: String,
    /// Step description
    pub description: String,
}

/// One learning-path row, pre-formatted for templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRow {
    /// 1-based rank
    pub rank: usize,
    /// Path title (id when untitled)
    pub title: String,
    /// Difficulty label
    pub difficulty: String,
    /// Completion, e.g. "50%"
    pub completion: String,
    /// Score
    pub score: i32,
}

/// Data context for report generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Learner the report is for
    pub learner_id: String,
    /// Crate version that produced the report
    pub version: String,
    /// Recommendation rows
    pub recommendations: Vec<RecommendationRow>,
    /// Next-step rows
    pub next_steps: Vec<StepRow>,
    /// Learning-path rows
    pub paths: Vec<PathRow>,
}

impl ReportContext {
    /// Flatten engine output into template rows
    #[must_use]
    pub fn new(learner_id: &str, advice: &LearnerAdvice) -> Self {
        let recommendations = advice
            .recommendations
            .iter()
            .enumerate()
            .map(|(idx, rec)| RecommendationRow {
                rank: idx + 1,
                course_id: rec.course.id.clone(),
                title: if rec.course.title.is_empty() {
                    rec.course.id.clone()
                } else {
                    rec.course.title.clone()
                },
                score: rec.score,
                kind: rec.kind.to_string(),
                reason: rec.reason.clone(),
            })
            .collect();

        let next_steps = advice
            .next_steps
            .iter()
            .enumerate()
            .map(|(idx, step)| StepRow {
                rank: idx + 1,
                kind: step.kind.to_string(),
                title: step.title.clone(),
                description: step.description.clone(),
            })
            .collect();

        let paths = advice
            .paths
            .iter()
            .enumerate()
            .map(|(idx, ranked)| PathRow {
                rank: idx + 1,
                title: if ranked.path.title.is_empty() {
                    ranked.path.id.clone()
                } else {
                    ranked.path.title.clone()
                },
                difficulty: ranked.path.difficulty.to_string(),
                completion: format!("{:.0}%", ranked.completion_ratio * 100.0),
                score: ranked.score,
            })
            .collect();

        Self {
            learner_id: learner_id.to_string(),
            version: crate::get_version().to_string(),
            recommendations,
            next_steps,
            paths,
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a given format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
