//! Diagnostic logging for the CLI.
//!
//! Diagnostics go to stderr through `tracing`; the run summary on stdout comes
//! from [`crate::output`]. By default only warnings show, so skipped or
//! unreadable pages stay quiet unless asked for.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "archive_redirects=debug"
    } else {
        "archive_redirects=warn"
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
