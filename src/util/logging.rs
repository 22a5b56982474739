// Logging setup for the command-line front-end

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
/// Falls back to `info`, or `debug` for this crate when `verbose` is set.
pub fn setup_logging(verbose: bool) {
    let dirs = if verbose {
        "info,textbook_rsa=debug"
    } else {
        "info,textbook_rsa=info"
    };

    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(dirs)))
        .with(main_layer)
        .init()
}
