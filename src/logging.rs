use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `HOOKGUARD_LOG=debug`
pub const LOG_ENV: &str = "HOOKGUARD_LOG";

/// Install the stderr subscriber. Logging is off unless `HOOKGUARD_LOG` is set,
/// so by default stderr carries only the hook's own report.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
