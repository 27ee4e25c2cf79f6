//! Logging subscriber initialisation.
//!
//! Log lines go to stderr; stdout is reserved for the priced output.

use std::{error::Error as StdError, io};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber was already installed, or installation failed.
    #[error("failed to initialise logging: {0}")]
    Init(#[source] Box<dyn StdError + Send + Sync>),
}

/// Install a compact `tracing` subscriber writing to stderr at `log_level`.
///
/// # Errors
///
/// Returns [`LoggingError::Init`] if a global subscriber is already set.
pub fn init(log_level: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_writer(io::stderr)
        .with_env_filter(build_env_filter(log_level))
        .try_init()
        .map_err(LoggingError::Init)
}

fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::new(log_level)
}
