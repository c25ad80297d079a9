pub mod config;
pub mod error_convert;
pub mod kpi;
pub mod repo;
pub mod search;
pub mod seed;
pub mod status;
pub mod telemetry;
pub mod workflow;

pub use repo::{CaseRepository, InMemoryCaseRepo};
pub use workflow::CaseWorkflow;

use chrono::Utc;
use shared_types::AppConfig;

/// Build a workflow from `config`: install tracing when telemetry is on and
/// seed the demo cases when demo data is on.
pub fn start(config: &AppConfig) -> CaseWorkflow<InMemoryCaseRepo> {
    if config.features.telemetry {
        telemetry::init_tracing(&config.logging);
    }
    let mut repo = InMemoryCaseRepo::new();
    if config.features.demo_data {
        seed::seed_demo_data(&mut repo, Utc::now());
    }
    CaseWorkflow::new(repo, config.workflow.clone())
}

/// [`start`] with the process-wide `config.toml`.
pub fn bootstrap() -> CaseWorkflow<InMemoryCaseRepo> {
    start(config::load_config())
}
