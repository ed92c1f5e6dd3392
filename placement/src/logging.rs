//! Diagnostic tracing for the placement registry.
//!
//! The interactive session owns stdout; diagnostics go to stderr and are
//! filtered by `RUST_LOG`. Data-file warnings (skipped or cut-off records)
//! show up at the default level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Output: stderr, compact format, without module targets so warnings stay
/// short next to the console prompts.
///
/// # Example
/// ```bash
/// RUST_LOG=placement=debug placement check
/// ```
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
