//! Markdown report generator

use crate::core::report::{PathRow, RecommendationRow, ReportContext, ReportGenerator, StepRow};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "advisor_report.md", escape = "none")]
struct MarkdownTemplate<'a> {
    learner_id: &'a str,
    version: &'a str,
    recommendations: &'a [RecommendationRow],
    next_steps: &'a [StepRow],
    paths: &'a [PathRow],
}

/// Markdown report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = MarkdownTemplate {
            learner_id: &ctx.learner_id,
            version: &ctx.version,
            recommendations: &ctx.recommendations,
            next_steps: &ctx.next_steps,
            paths: &ctx.paths,
        };
        Ok(template.render()?)
    }
}
