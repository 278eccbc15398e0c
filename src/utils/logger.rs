use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber once. Filtered by `RUST_LOG`, `warn` otherwise.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = fmt::Subscriber::builder()
            // Stdout carries the probe report; logs stay on stderr.
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .finish();

        // Another subscriber already being set (e.g. by an embedding app) is fine.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
