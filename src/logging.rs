use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter that overrides the flags.
pub const LOG_ENV: &str = "KSH_LOG";

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber writing to stderr. Calling it again is a
/// no-op.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
