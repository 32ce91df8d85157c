//! HTML report generator
//!
//! The page is self-contained: styles are inlined in the template.

use crate::core::report::{PathRow, RecommendationRow, ReportContext, ReportGenerator, StepRow};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "advisor_report.html")]
struct HtmlTemplate<'a> {
    learner_id: &'a str,
    version: &'a str,
    recommendations: &'a [RecommendationRow],
    next_steps: &'a [StepRow],
    paths: &'a [PathRow],
}

/// HTML report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
            learner_id: &ctx.learner_id,
            version: &ctx.version,
            recommendations: &ctx.recommendations,
            next_steps: &ctx.next_steps,
            paths: &ctx.paths,
        };
        Ok(template.render()?)
    }
}
