use std::sync::OnceLock;

use shared_types::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the global fmt subscriber.
///
/// Loads `.env` first so `RUST_LOG` can come from there. `RUST_LOG` wins
/// over `logging.level`. Only the first call has effect; the return value
/// says whether this process ended up with our subscriber installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    *INSTALLED.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|e| {
                eprintln!(
                    "[telemetry] Invalid log level {:?} ({e}), falling back to info",
                    config.level
                );
                EnvFilter::new("info")
            });

        match tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
        {
            Ok(()) => true,
            Err(e) => {
                eprintln!("[telemetry] Subscriber already set ({e}), keeping it");
                false
            }
        }
    })
}
