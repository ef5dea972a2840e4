//! Structured logging setup for the CLI.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::domain::AppError;
use crate::domain::configuration::{LogFormat, LoggingConfig};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Install the global subscriber on first call; later calls are no-ops.
///
/// `RUST_LOG`, when set and valid, replaces the configured filter.
pub fn initialise(config: &LoggingConfig) -> Result<(), AppError> {
    TELEMETRY_GUARD.get_or_try_init(|| install_subscriber(config)).map(|_| ())
}

fn filter(config: &LoggingConfig) -> Result<EnvFilter, AppError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|err| {
        AppError::config_error(format!("invalid logging.filter '{}': {}", config.filter, err))
    })
}

fn install_subscriber(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = filter(config)?;

    let builder = |filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.format {
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| AppError::config_error(format!("failed to install logger: {}", err)))
}
