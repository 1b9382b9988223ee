use tracing_subscriber::EnvFilter;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Level after raising `base` by `verbose` steps; unknown names count as `info`.
pub fn effective_level(base: &str, verbose: u8) -> &'static str {
    let base = LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(base.trim()))
        .unwrap_or(2);
    LEVELS[(base + verbose as usize).min(LEVELS.len() - 1)]
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured level.
pub fn init(base: &str, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(base, verbose)));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
