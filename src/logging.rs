//! Diagnostic logging to stderr. Console notices are not routed through here.

use tracing_subscriber::EnvFilter;

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() -> Result<(), InitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()?;

    tracing::debug!("logging initialized");

    Ok(())
}
