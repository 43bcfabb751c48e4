//! Structured logging with tracing

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Error raised when the global subscriber cannot be installed
#[derive(Debug, thiserror::Error)]
pub enum LoggingInitError {
    #[error("Invalid log filter directive '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the env filter, preferring RUST_LOG over the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingInitError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|source| LoggingInitError::InvalidFilter {
        directive: config.level.clone(),
        source,
    })
}

/// Initialize the global tracing subscriber.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingInitError> {
    let filter = build_filter(config)?;

    let result = match config.format.as_str() {
        "pretty" => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .try_init(),
        _ => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .flatten_event(true)
            .try_init(),
    };

    result.map_err(|e| LoggingInitError::Install(e.to_string()))
}
