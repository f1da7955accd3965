use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log the time elapsed since `$start` at trace level, with optional fields.
///
/// ```rust,ignore
/// let start = Instant::now();
/// trace_time!(start, "playback", steps = run.steps_emitted());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber.
///
/// `RUST_LOG`, then `GRAPHSTEP_LOG`, take precedence over the flags. Logs go
/// to stderr so stdout stays reserved for steps and results.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = default_directive(verbose, log_level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHSTEP_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
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

/// Without `--verbose` or `--log-level` only the binary's warnings are
/// shown; library diagnostics stay off stderr next to structured output
fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(level) => filter_directive(level),
        None if verbose => filter_directive("debug"),
        None => "graphstep=warn".to_string(),
    }
}

/// A bare level applies to both graphstep crates; anything with `=` is
/// passed through as a full directive
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphstep={level},graphstep_core={level}")
    }
}
