//! Console logging setup.
//!
//! ```ignore
//! lumen_core::logging::init("info,lumen_core=debug")?;
//! tracing::info!("ready");
//! ```
//!
//! `RUST_LOG`, when set, takes precedence over the default filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a global fmt subscriber.
pub fn init(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let _ = init("warn");
        assert!(init("warn").is_err());
    }
}
