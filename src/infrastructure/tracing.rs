use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing on stderr, keeping stdout for step reports.
/// Priority: VHOST_LOG env > verbose flag > default (info)
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("VHOST_LOG").unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("vhost={}", level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
