//! Paths command handler

use super::open_engine;
use nu_advisor::config::Config;
use nu_advisor::error;

/// Print ranked learning paths for a learner
pub fn run(learner: &str, config: &Config) -> bool {
    let engine = match open_engine(config) {
        Ok(engine) => engine,
        Err(msg) => {
            eprintln!("{msg}");
            return false;
        }
    };

    match engine.get_recommended_paths(learner) {
        Ok(paths) => {
            println!("\n=== Learning paths for {learner} ===");
            if paths.is_empty() {
                println!("  (no open paths)");
            }
            for (idx, ranked) in paths.iter().enumerate() {
                let title = if ranked.path.title.is_empty() {
                    &ranked.path.id
                } else {
                    &ranked.path.title
                };
                println!(
                    "{:>3}. [{:>3}] {title} ({}, {:.0}% complete, {} courses)",
                    idx + 1,
                    ranked.score,
                    ranked.path.difficulty,
                    ranked.completion_ratio * 100.0,
                    ranked.path.courses.len()
                );
            }
            true
        }
        Err(e) => {
            error!("Learning paths for '{learner}' failed: {e}");
            eprintln!("✗ {learner}: {e}");
            false
        }
    }
}
