//! Integration tests for advisory report rendering

use nu_advisor::core::report::{reporter_for, ReportContext, ReportFormat};
use nu_advisor::core::store::InMemoryStore;
use nu_advisor::core::engine::LearnerAdvice;
use nu_advisor::RecommendationEngine;
use std::fs;
use std::str::FromStr;
use tempfile::TempDir;

fn sample_advice(learner: &str) -> LearnerAdvice {
    let store = InMemoryStore::from_toml(include_str!("../samples/store.toml"))
        .expect("sample store parses");
    RecommendationEngine::new(store)
        .advise(learner, 10)
        .expect("advice")
}

#[test]
fn context_ranks_rows_from_one() {
    let ctx = ReportContext::new("grace", &sample_advice("grace"));

    assert_eq!(ctx.learner_id, "grace");
    assert_eq!(ctx.recommendations[0].rank, 1);
    assert_eq!(ctx.recommendations[0].course_id, "py-201");
    assert_eq!(ctx.recommendations[0].kind, "prerequisite");
    assert_eq!(ctx.paths[1].completion, "67%");
    assert!(!ctx.version.is_empty());
}

#[test]
fn markdown_report_lists_all_sections() {
    let ctx = ReportContext::new("ada", &sample_advice("ada"));
    let md = reporter_for(ReportFormat::Markdown)
        .render(&ctx)
        .expect("render markdown");

    assert!(md.contains("# Learning advice for ada"));
    assert!(md.contains("Design Thinking"));
    assert!(md.contains("Continue Python Foundations"));
    assert!(md.contains("Python Developer"));
}

#[test]
fn empty_sections_render_placeholders() {
    let ctx = ReportContext::new("nobody", &LearnerAdvice::default());
    let md = reporter_for(ReportFormat::Markdown)
        .render(&ctx)
        .expect("render markdown");

    assert!(md.contains("No recommendations right now."));
    assert!(md.contains("No learning paths to suggest."));
}

#[test]
fn html_report_is_written_and_escaped() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("report.html");

    let ctx = ReportContext::new("<ada>", &sample_advice("ada"));
    let format = ReportFormat::from_str("html").expect("format");
    reporter_for(format).generate(&ctx, &out).expect("write html");

    let html = fs::read_to_string(&out).expect("read html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("&lt;ada&gt;"));
    assert!(html.contains("Perfect next step") || html.contains("Popular choice"));
}
