#![forbid(unsafe_code)]

//! `tracing` subscriber setup shared by binaries, benches and test suites.

use tracing_subscriber::EnvFilter;

use crate::CodecConfig;

/// Install a formatted subscriber filtered at `level`. `RUST_LOG` takes precedence when set.
///
/// Returns `false` if a global subscriber was already installed, so repeated calls from
/// several tests are harmless.
pub fn init_tracing(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Install a subscriber using the configured log level (`info` when unset).
pub fn init_from_config(cfg: &CodecConfig) -> bool {
    init_tracing(cfg.log_level.as_deref().unwrap_or("info"))
}
