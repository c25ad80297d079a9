use shared_types::{AppConfig, AppError};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Parse `config.toml` contents. Missing sections and fields take defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents)
        .map_err(|e| AppError::bad_request(format!("Invalid {CONFIG_PATH}: {e}")))
}

/// Read and parse a config file, falling back to defaults when it is
/// missing or unparseable.
pub fn read_config(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            eprintln!("[config] {e}, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            eprintln!("[config] {} not found ({e}), using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Read `config.toml` into the global `OnceLock`. Safe to call multiple
/// times; only the first call reads the file.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config(CONFIG_PATH);
        eprintln!(
            "[config] Feature flags: {:?}, workflow: {:?}",
            config.features, config.workflow
        );
        config
    })
}

/// The loaded config, or defaults when [`load_config`] has not run yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
