//! CLI command handlers for `NuAdvisor`.
//!
//! Each subcommand is implemented in its own submodule. Handlers print to
//! stdout/stderr and return `false` when the command failed.

pub mod config;
pub mod next_steps;
pub mod paths;
pub mod recommend;
pub mod report;

use nu_advisor::config::Config;
use nu_advisor::core::source::CachedCatalog;
use nu_advisor::core::store::InMemoryStore;
use nu_advisor::{error, RecommendationEngine};

/// Engine over the configured TOML store, with the catalog cached for the run
pub type StoreEngine = RecommendationEngine<CachedCatalog<InMemoryStore>>;

/// Open the data store named by `config.data.store_file`
///
/// # Errors
/// Returns a printable message if the store is unset, unreadable or invalid.
pub fn open_engine(config: &Config) -> Result<StoreEngine, String> {
    let store_file = &config.data.store_file;
    if store_file.is_empty() {
        return Err(
            "✗ No data store configured (use --store FILE or `config set store_file FILE`)"
                .to_string(),
        );
    }

    let store = InMemoryStore::load(store_file).map_err(|e| {
        error!("Failed to load data store {store_file}: {e}");
        format!("✗ Failed to load {store_file}: {e}")
    })?;
    let cached = CachedCatalog::new(store).map_err(|e| format!("✗ Catalog unavailable: {e}"))?;
    Ok(RecommendationEngine::new(cached))
}

/// Resolve the effective recommendation limit
pub fn effective_limit(limit: Option<i64>, config: &Config) -> i64 {
    limit.unwrap_or_else(|| config.engine.limit())
}
