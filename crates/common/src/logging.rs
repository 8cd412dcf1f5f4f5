use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing_subscriber::util::TryInitError;

/// Initialize tracing subscriber with pretty formatting for development
/// and JSON formatting for production.
///
/// Uses RUST_LOG environment variable for filtering (defaults to "info" if not set).
/// Panics if a global subscriber is already installed; use [`try_setup_logging`]
/// when that can happen (tests, embedding applications).
pub fn setup_logging(environment: Environment) {
    try_setup_logging(environment).expect("Failed to install tracing subscriber");
}

/// Same as [`setup_logging`] but reports an already-installed subscriber as an error.
pub fn try_setup_logging(environment: Environment) -> Result<(), TryInitError> {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    match environment {
        Environment::Production => registry
            .with(tracing_subscriber::fmt::layer().json().with_level(true))
            .try_init(),
        Environment::Development => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_ansi(true))
            .try_init(),
    }
}
