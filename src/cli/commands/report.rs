//! Report command handler
//!
//! Writes a learner's recommendations, next steps and learning paths to a
//! Markdown or HTML file.

use super::{effective_limit, open_engine};
use nu_advisor::config::Config;
use nu_advisor::core::report::{reporter_for, ReportContext, ReportFormat};
use nu_advisor::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `learner` - Learner id
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `limit` - Optional recommendation limit
/// * `config` - Configuration containing store and default output directory
pub fn run(
    learner: &str,
    output_file: Option<&Path>,
    format_str: &str,
    limit: Option<i64>,
    config: &Config,
) -> bool {
    match generate_report(learner, output_file, format_str, limit, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            true
        }
        Err(err) => {
            error!("Report generation failed for '{learner}': {err}");
            eprintln!("{err}");
            false
        }
    }
}

/// Default report location: `<reports_dir>/<learner>_advice.<ext>`
#[must_use]
pub fn default_output_path(reports_dir: &Path, learner: &str, format: ReportFormat) -> PathBuf {
    let stem: String = learner
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    reports_dir.join(format!("{stem}_advice.{}", format.extension()))
}

fn generate_report(
    learner: &str,
    output_file: Option<&Path>,
    format_str: &str,
    limit: Option<i64>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let engine = open_engine(config)?;

    let advice = engine
        .advise(learner, effective_limit(limit, config))
        .map_err(|e| format!("✗ Failed to build advice for {learner}: {e}"))?;

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => {
            let reports_dir = PathBuf::from(&config.paths.reports_dir);
            std::fs::create_dir_all(&reports_dir).map_err(|e| {
                format!(
                    "✗ Failed to create reports directory {}: {e}",
                    reports_dir.display()
                )
            })?;
            default_output_path(&reports_dir, learner, format)
        }
    };

    let ctx = ReportContext::new(learner, &advice);
    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    info!(
        "Report for '{learner}' written to {} ({} recommendations, {} steps, {} paths)",
        output_path.display(),
        advice.recommendations.len(),
        advice.next_steps.len(),
        advice.paths.len()
    );
    Ok(output_path)
}
