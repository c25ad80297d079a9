use serde::{Deserialize, Serialize};

/// Feature flags controlling optional startup behaviour.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file leaves the engine empty and quiet.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Seed the repository with the demo cases.
    #[serde(default)]
    pub demo_data: bool,
    /// Install the tracing subscriber.
    #[serde(default)]
    pub telemetry: bool,
}

/// Knobs for the workflow actions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WorkflowConfig {
    /// Also require an invoice reviewed as OK before a case can be finished.
    #[serde(default)]
    pub require_invoice_review: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
