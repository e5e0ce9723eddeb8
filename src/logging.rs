//! Structured logging setup for drivers embedding graphlab

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for a graphlab driver.
///
/// `level` overrides the default (`graphlab=warn`); the `GRAPHLAB_LOG`
/// environment variable, or a standard `RUST_LOG`, overrides both. With
/// `log_json` events are emitted as JSON lines on stderr, otherwise in a
/// compact human format.
pub fn init_tracing(
    level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHLAB_LOG"))
        .unwrap_or_else(|_| match level {
            Some(level) if level.contains('=') => EnvFilter::new(level),
            Some(level) => EnvFilter::new(format!("graphlab={}", level)),
            None => EnvFilter::new("graphlab=warn"),
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
