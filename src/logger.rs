use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variables consulted for the log filter, in priority order.
const LOG_FILTER_VARS: [&str; 2] = ["URLFETCH_LOG", "RUST_LOG"];

/// Installs the global `tracing` subscriber on stderr so the timing report on
/// stdout stays clean.
///
/// An unparsable filter falls back to `info`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = LOG_FILTER_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .map_or_else(
            || EnvFilter::new(default_level),
            |directives| EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Global subscriber already installed; keeping it");
    }
}
