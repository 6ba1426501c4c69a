// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Initialize logging, filtered by `RUST_LOG` (default `info`).
///
/// Subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
