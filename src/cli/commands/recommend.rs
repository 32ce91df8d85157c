//! Recommend command handler

use super::{effective_limit, open_engine};
use nu_advisor::config::Config;
use nu_advisor::core::models::Recommendation;
use nu_advisor::{error, verbose};

/// Print ranked recommendations for each learner
///
/// Returns `false` if the store could not be opened or any learner failed.
pub fn run(learners: &[String], limit: Option<i64>, config: &Config) -> bool {
    let engine = match open_engine(config) {
        Ok(engine) => engine,
        Err(msg) => {
            eprintln!("{msg}");
            return false;
        }
    };
    let limit = effective_limit(limit, config);

    let mut ok = true;
    for learner in learners {
        match engine.get_recommendations(learner, limit) {
            Ok(recs) => print_recommendations(learner, &recs),
            Err(e) => {
                error!("Recommendations for '{learner}' failed: {e}");
                eprintln!("✗ {learner}: {e}");
                ok = false;
            }
        }
    }
    ok
}

fn print_recommendations(learner: &str, recs: &[Recommendation]) {
    println!("\n=== Recommendations for {learner} ===");
    if recs.is_empty() {
        println!("  (nothing to recommend)");
        return;
    }
    for (idx, rec) in recs.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}] {} ({}) - {}",
            idx + 1,
            rec.score,
            rec.course.title,
            rec.course.id,
            rec.reason
        );
        verbose!(
            "       type={} difficulty={} rating={:.1} enrolled={}",
            rec.kind,
            rec.course.difficulty,
            rec.course.rating.average,
            rec.course.enrolled_count
        );
    }
}
