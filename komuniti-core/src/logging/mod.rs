//! Logging subsystem for Komuniti
//!
//! Thin initialization layer over the `tracing` stack. The engine itself
//! only emits events; installing a subscriber is the embedding
//! application's call, made at most once per process.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod level;

pub use error::LoggingError;
pub use level::LogLevel;

/// Configuration for the logging subsystem
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum level emitted when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Include the emitting module path in each event
    pub with_target: bool,
    /// Emit newline-delimited JSON instead of human-readable lines
    pub json_format: bool,
}

impl LogConfig {
    pub fn new(level: LogLevel) -> Self {
        LogConfig {
            level,
            with_target: true,
            json_format: false,
        }
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    pub fn json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }
}

/// Initialize logging with the default configuration.
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with_config(LogConfig::new(LogLevel::default()))
}

/// Initialize logging with a custom configuration.
///
/// A `RUST_LOG` environment filter takes precedence over the configured
/// level. Fails if a global subscriber is already installed.
pub fn init_logging_with_config(config: LogConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json_format {
        registry
            .with(fmt::layer().with_target(config.with_target).json())
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(config.with_target))
            .try_init()
    };

    result.map_err(|err| LoggingError::InitializationFailed(err.to_string()))
}
