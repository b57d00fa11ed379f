//! Logging setup for the binary

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

static INIT: OnceLock<()> = OnceLock::new();

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` when `verbose`
/// and `warn` when not. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );
        // A subscriber may already be installed (tests).
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
