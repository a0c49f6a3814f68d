//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Verbosity flows from the CLI flags; `RUST_LOG` overrides the computed
//! filter when no explicit verbosity was given.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output without timestamps.
    #[default]
    Pretty,
    /// JSON lines for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter for the posadmin crates.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override the computed filter.
    pub use_env_filter: bool,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            format: LogFormat::default(),
        }
    }
}

/// Initialize the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(config.level_filter)))
    } else {
        EnvFilter::new(default_directives(config.level_filter))
    };

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false).without_time())
                .init();
        }
    }
}

/// Our crates log at the requested level; external crates stay at warn to
/// keep the output readable.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!(
        "warn,posadmin_cli={level},posadmin_engine={level},posadmin_model={level},\
         posadmin_session={level},posadmin_validate={level}"
    )
}
