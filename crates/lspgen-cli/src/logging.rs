//! Diagnostic logging setup

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter for a `-v` count when `RUST_LOG` is unset.
///
/// Warnings always show so format fallbacks and name overlaps are visible.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,lspgen=info,lspgen_codegen=info,lspgen_model=info",
        2 => "info,lspgen=debug,lspgen_codegen=debug,lspgen_model=debug",
        _ => "debug,lspgen=trace,lspgen_codegen=trace,lspgen_model=trace",
    }
}

/// Install the global subscriber; diagnostics go to stderr
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
