use std::path::Path;

use engine::config::{parse_config, read_config};
use engine::CaseRepository;
use pretty_assertions::assert_eq;
use shared_types::{AppConfig, FeatureFlags, LoggingConfig, WorkflowConfig};

#[test]
fn shipped_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    let config = read_config(path);
    assert_eq!(
        config,
        AppConfig {
            features: FeatureFlags {
                demo_data: true,
                telemetry: true,
            },
            workflow: WorkflowConfig {
                require_invoice_review: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    );
}

#[test]
fn strict_review_flag_parses() {
    let config = parse_config("[workflow]\nrequire_invoice_review = true\n").unwrap();
    assert!(config.workflow.require_invoice_review);
    assert!(!config.features.demo_data);
}

#[test]
fn start_seeds_demo_cases_when_enabled() {
    let config = AppConfig {
        features: FeatureFlags {
            demo_data: true,
            telemetry: false,
        },
        ..Default::default()
    };
    let wf = engine::start(&config);
    assert_eq!(wf.repo().len(), 6);
}

#[test]
fn start_is_empty_without_demo_data() {
    let config = AppConfig {
        workflow: WorkflowConfig {
            require_invoice_review: true,
        },
        ..Default::default()
    };
    let wf = engine::start(&config);
    assert!(wf.repo().is_empty());
    assert!(wf.config().require_invoice_review);
}
