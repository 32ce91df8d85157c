//! Next-steps command handler

use super::open_engine;
use nu_advisor::config::Config;
use nu_advisor::error;

/// Print the prioritized next steps for a learner
pub fn run(learner: &str, config: &Config) -> bool {
    let engine = match open_engine(config) {
        Ok(engine) => engine,
        Err(msg) => {
            eprintln!("{msg}");
            return false;
        }
    };

    match engine.get_next_steps(learner) {
        Ok(steps) => {
            println!("\n=== Next steps for {learner} ===");
            if steps.is_empty() {
                println!("  (no open work)");
            }
            for (idx, step) in steps.iter().enumerate() {
                println!("{:>3}. [{}] {}", idx + 1, step.kind, step.title);
                println!("       {}", step.description);
            }
            true
        }
        Err(e) => {
            error!("Next steps for '{learner}' failed: {e}");
            eprintln!("✗ {learner}: {e}");
            false
        }
    }
}
